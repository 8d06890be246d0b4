//! Search command handler.

use anyhow::Result;
use juso_core::SearchParams;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_address_list;

/// Execute the search command.
///
/// Prints the results with the current display toggles and waits for the
/// results to be saved before returning.
pub async fn execute(ctx: &CliContext, keyword: &str, page: &str, count: &str) -> Result<()> {
    let output = run(ctx, &SearchParams::new(keyword, page, count)).await?;
    print!("{output}");
    Ok(())
}

pub(crate) async fn run(ctx: &CliContext, params: &SearchParams) -> Result<String, CliError> {
    let display = ctx.settings().wait_ready().await.search_result;

    let outcome = ctx.address().search(params).await;
    ctx.address().flush_cache_writes().await;

    match outcome? {
        Some(records) => Ok(render_address_list(&records, &display)),
        None if !ctx.host().has_store() => Ok(format!(
            "Search not attempted: no settings store in {} mode (drop --ephemeral or check --db)\n",
            ctx.host().runtime()
        )),
        None => Ok("검색할 주소를 입력하세요.\n".to_string()),
    }
}
