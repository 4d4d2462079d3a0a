use teloxide::prelude::*;

use crate::bot::handlers::BotHandler;
use crate::bot::render::render_history;
use crate::bot::{display_names, name_lookup};
use crate::giveaway::ArchiveEntry;
use crate::utils::feedback::CommandFeedback;

/// How many past rounds /history shows.
const HISTORY_LIMIT: usize = 5;

pub async fn handle_history(bot: &Bot, msg: &Message, handler: &BotHandler) -> ResponseResult<Message> {
    let rounds = handler.controller.recent_archive(HISTORY_LIMIT).await;

    fn round_winner((_, round): &(String, ArchiveEntry)) -> Option<u64> {
        round.winner()
    }
    let winners = rounds.iter().filter_map(round_winner);
    let names = display_names(bot, ChatId(handler.settings.chat_id), winners).await;

    CommandFeedback::new(bot.clone(), msg.chat.id)
        .send_markdown(render_history(&rounds, name_lookup(&names)))
        .await
}
