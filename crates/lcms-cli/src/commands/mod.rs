pub mod export;
pub mod history;
pub mod load;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Load(args) => load::handle(&args, flags).await,
        Commands::Export(args) => export::handle(&args, flags).await,
        Commands::History(args) => history::handle(&args, flags).await,
    }
}
