//! Toggle command handler.
//!
//! The view value is flipped first and the store second; if the store
//! rejects the write the view is put back.

use anyhow::Result;
use juso_core::{
    DisplayField, SearchResultDisplay, SettingsDocument, SettingsError, SettingsManager,
    SettingsPatch,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{field_label, render_toggles};

/// Execute the toggle command.
pub async fn execute(ctx: &CliContext, field: DisplayField) -> Result<()> {
    let mut view = ctx.settings().wait_ready().await.search_result;

    match toggle(ctx.settings(), &mut view, field).await {
        Ok(enabled) => {
            let state = if enabled { "on" } else { "off" };
            println!("✓ {} {state}", field_label(field));
            println!("{}", render_toggles(&view));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", render_toggles(&view));
            Err(CliError::from(e).into())
        }
    }
}

/// Flip `field` in `view` and persist it.
///
/// Returns the new value. On failure `view` is restored and the error is
/// returned; the settings mirror is untouched either way until the store
/// acknowledges.
pub async fn toggle(
    settings: &SettingsManager<SettingsDocument>,
    view: &mut SearchResultDisplay,
    field: DisplayField,
) -> Result<bool, SettingsError> {
    let previous = view.get(field);
    view.set(field, !previous);

    if let Err(e) = settings
        .update_settings(SettingsPatch::display(field, !previous))
        .await
    {
        view.set(field, previous);
        return Err(e);
    }
    Ok(!previous)
}
