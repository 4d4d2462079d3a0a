use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::{BotHandler, HandlerResult};
use crate::bot::commands::Command;
use crate::bot::render::render_rules;
use crate::utils::feedback::CommandFeedback;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    handler: BotHandler,
) -> HandlerResult {
    handler.track_if_designated(&msg).await;

    let sent = match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?
        }
        Command::Start => {
            let status = handler.controller.status().await;
            let text = render_rules(
                &handler.controller.range(),
                &handler.controller.schedule(),
                &status,
            );
            CommandFeedback::new(bot.clone(), msg.chat.id)
                .send_markdown(text)
                .await?
        }
        Command::Status => crate::bot::commands::status::handle_status(&bot, &msg, &handler).await?,
        Command::History => crate::bot::commands::history::handle_history(&bot, &msg, &handler).await?,
    };

    if msg.chat.id.0 == handler.settings.chat_id {
        handler.tracker.track(sent.id).await;
    }
    Ok(())
}
