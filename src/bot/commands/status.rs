use teloxide::prelude::*;

use crate::bot::handlers::BotHandler;
use crate::bot::render::render_status;
use crate::utils::feedback::CommandFeedback;

pub async fn handle_status(bot: &Bot, msg: &Message, handler: &BotHandler) -> ResponseResult<Message> {
    let user_id = msg.from().map(|u| u.id.0);
    tracing::debug!(
        "Status requested by {:?} in chat {}",
        user_id,
        msg.chat.id.0
    );

    let status = handler.controller.status().await;
    let mine = match user_id {
        Some(id) => handler.controller.entries_of(id).await,
        None => Vec::new(),
    };

    CommandFeedback::new(bot.clone(), msg.chat.id)
        .replying_to(msg.id)
        .send_markdown(render_status(&status, &mine))
        .await
}
