//! Writes the standard ion table that operators edit.
//!
//! One row per result, ordered by id. The manual pick, author and note come
//! from the curated ion the result references; an unset pick is written as
//! the unset token so that loading an unedited export changes nothing.

use std::io::Write;

use lcms_core::columns::EXPORT_HEADER;
use lcms_db::service::IonService;

use crate::error::ExportError;

/// Write every result as a tab-delimited row. Returns the number of rows.
///
/// # Errors
///
/// Returns `ExportError` if the store cannot be read, a result references a
/// missing curated ion, a field contains a tab or line break, or the writer
/// fails.
pub async fn export_tsv<W: Write>(
    service: &IonService,
    writer: W,
    null_value: &str,
) -> Result<usize, ExportError> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);
    out.write_record(EXPORT_HEADER)?;

    let results = service.list_results().await?;
    for result in &results {
        let curated = match result.manual_override_id {
            Some(curated_ion_id) => Some(
                service
                    .find_curated_ion(curated_ion_id)
                    .await?
                    .ok_or(ExportError::DanglingOverride {
                        result_id: result.id,
                        curated_ion_id,
                    })?,
            ),
            None => None,
        };

        let id = result.id.to_string();
        let record = [
            id.as_str(),
            result.chemical.as_str(),
            result.best_metlin_ion.as_deref().unwrap_or(null_value),
            curated
                .as_ref()
                .map_or(null_value, |c| c.best_metlin_ion.as_str()),
            curated.as_ref().map_or("", |c| c.author.as_str()),
            curated
                .as_ref()
                .and_then(|c| c.note.as_deref())
                .unwrap_or_default(),
        ];
        // Fields are written unquoted, so a delimiter inside one would shift columns.
        if let Some((column, _)) = EXPORT_HEADER
            .into_iter()
            .zip(record)
            .find(|(_, field)| field.contains(['\t', '\n', '\r']))
        {
            return Err(ExportError::UnexportableField {
                result_id: result.id,
                column,
            });
        }
        out.write_record(record)?;
    }
    out.flush()?;

    tracing::info!(rows = results.len(), "exported standard ion results");
    Ok(results.len())
}
