use vocabot_core::Destination;
use vocabot_telegram::ChatKind;

use crate::events::reply;
use crate::state::AppContext;

pub fn menu(batch_size: usize, page_size: usize) -> String {
    format!(
        "📚 Commands Available:\n\
         /start — Random {batch_size} words\n\
         /search <word> — Find a word\n\
         /page <n> — Show page n ({page_size} words per page)"
    )
}

/// Answer plain text with the command menu. In groups, only when mentioned.
pub async fn handle_help(
    ctx: &AppContext,
    destination: Destination,
    chat_kind: ChatKind,
    text: &str,
) -> anyhow::Result<()> {
    if chat_kind.is_group() {
        let mention = format!("@{}", ctx.bot_username);
        if !text.to_lowercase().contains(&mention) {
            return Ok(());
        }
    }

    let delivery = &ctx.config.delivery;
    reply(ctx, destination, &menu(delivery.batch_size, delivery.page_size)).await
}
