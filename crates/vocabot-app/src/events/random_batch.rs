use vocabot_core::Destination;

use crate::events::{DATA_NOT_LOADED, reply};
use crate::state::AppContext;

pub async fn handle_random_batch(ctx: &AppContext, destination: Destination) -> anyhow::Result<()> {
    if ctx.vocab.is_empty() {
        return reply(ctx, destination, DATA_NOT_LOADED).await;
    }

    let batch = {
        let mut rng = rand::rng();
        ctx.vocab.random_batch(ctx.config.delivery.batch_size, &mut rng)
    };

    reply(
        ctx,
        destination,
        &format!("⏳ Preparing {} vocabulary words...", batch.len()),
    )
    .await?;

    ctx.delivery.deliver(destination, batch).await;

    reply(ctx, destination, "🎉 All words sent!").await
}
