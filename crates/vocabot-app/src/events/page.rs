use vocabot_core::Destination;

use crate::commands::parse_page_number;
use crate::events::{DATA_NOT_LOADED, reply};
use crate::state::AppContext;

pub async fn handle_page(
    ctx: &AppContext,
    destination: Destination,
    arg: Option<&str>,
) -> anyhow::Result<()> {
    let Some(page) = arg.and_then(parse_page_number) else {
        return reply(ctx, destination, "Usage: /page <number>").await;
    };

    if ctx.vocab.is_empty() {
        return reply(ctx, destination, DATA_NOT_LOADED).await;
    }

    let chunk = ctx.vocab.page(page, ctx.config.delivery.page_size);
    if chunk.is_empty() {
        return reply(ctx, destination, "❌ Page out of range.").await;
    }

    reply(ctx, destination, &format!("📖 Showing page {page}")).await?;

    ctx.delivery.deliver(destination, chunk).await;
    Ok(())
}
