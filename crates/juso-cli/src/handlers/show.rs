//! Show command handler: restores the last search.

use std::fmt::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{render_address_list, render_toggles};

/// Execute the show command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    print!("{}", render(ctx).await);
    Ok(())
}

/// The screen a reopened front-end starts from.
///
/// The keyword line only appears when cached results exist.
pub(crate) async fn render(ctx: &CliContext) -> String {
    let settings = ctx.settings().wait_ready().await;

    let mut out = String::new();
    if let Some(keyword) = settings.restored_keyword() {
        let _ = writeln!(out, "검색어: {keyword}");
    }
    let _ = writeln!(out, "{}", render_toggles(&settings.search_result));
    out.push('\n');
    out.push_str(&render_address_list(
        &settings.address_data,
        &settings.search_result,
    ));
    out
}
