use lcms_curate::source::read_edit_rows;
use lcms_curate::{BatchMode, Reconciler, run_batch};
use serde_json::json;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoadArgs;
use crate::output::output;

pub async fn handle(args: &LoadArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let author = args.author.trim();
    if author.is_empty() {
        anyhow::bail!("--author must not be blank");
    }

    let config = bootstrap::load_config(flags)?;
    let vocabulary = config.curation.vocabulary()?;

    // A missing or malformed file fails here, before the store is touched.
    let rows = read_edit_rows(&args.input)?;

    let service = bootstrap::open_store(&config.database).await?;
    let reconciler =
        Reconciler::new(&vocabulary, author).with_null_value(&config.curation.null_value);
    let mode = if args.dry_run {
        BatchMode::DryRun
    } else {
        BatchMode::Commit
    };

    let report = run_batch(&service, &reconciler, &rows, mode).await?;

    output(
        &json!({
            "input": args.input.display().to_string(),
            "author": author,
            "dry_run": args.dry_run,
            "rows": report.rows(),
            "report": report,
        }),
        flags.format,
    )
}
