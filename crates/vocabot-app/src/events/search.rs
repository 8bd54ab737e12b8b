use vocabot_core::Destination;

use crate::events::{DATA_NOT_LOADED, reply};
use crate::state::AppContext;

pub async fn handle_search(
    ctx: &AppContext,
    destination: Destination,
    query: &str,
) -> anyhow::Result<()> {
    if query.trim().is_empty() {
        return reply(ctx, destination, "Usage: /search <word>").await;
    }

    if ctx.vocab.is_empty() {
        return reply(ctx, destination, DATA_NOT_LOADED).await;
    }

    let limit = ctx.config.delivery.search_limit;
    let hits = ctx.vocab.search(query, limit);
    tracing::debug!(total = hits.total, "Search finished");

    if hits.total == 0 {
        return reply(ctx, destination, "❌ No matching words found.").await;
    }

    reply(
        ctx,
        destination,
        &format!("🔎 Found {} result(s). Showing up to {limit}:", hits.total),
    )
    .await?;

    ctx.delivery.deliver(destination, hits.shown).await;
    Ok(())
}
