use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use lcms_curate::export::export_tsv;
use serde_json::json;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::output::output;

pub async fn handle(args: &ExportArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags)?;
    let service = bootstrap::open_store(&config.database).await?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let rows = export_tsv(&service, BufWriter::new(file), &config.curation.null_value)
        .await
        .with_context(|| format!("failed to export to {}", args.output.display()))?;

    output(
        &json!({
            "output": args.output.display().to_string(),
            "rows": rows,
        }),
        flags.format,
    )
}
