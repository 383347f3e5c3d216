use lcms_curate::history::load_history;
use lcms_db::error::DatabaseError;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::output::output;

pub async fn handle(args: &HistoryArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags)?;
    let service = bootstrap::open_store(&config.database).await?;

    let history = match load_history(&service, args.result_id).await {
        Ok(history) => history,
        Err(DatabaseError::NoResult) => {
            anyhow::bail!("standard ion result {} does not exist", args.result_id)
        }
        Err(error) => return Err(error.into()),
    };

    output(&history, flags.format)
}
