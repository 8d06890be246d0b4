//! Settings command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::SettingsCommand;

/// Execute the settings command.
pub async fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let settings = ctx.settings().wait_ready().await;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCommand::Path => match &ctx.db_path {
            Some(path) => println!("{}", path.display()),
            None => println!("(no store: running in {} mode)", ctx.host().runtime()),
        },
    }
    Ok(())
}
