use teloxide::prelude::*;
use teloxide::types::Me;

use super::{BotHandler, HandlerResult};
use crate::giveaway::entry::{classify_message, IncomingMessage};
use crate::giveaway::EntryOutcome;
use crate::utils::feedback::CommandFeedback;

/// Handles plain messages. Only digit-only text in the giveaway chat counts
/// as an entry; everything else is ignored without a reply.
pub async fn entry_handler(bot: Bot, msg: Message, me: Me, handler: BotHandler) -> HandlerResult {
    handler.track_if_designated(&msg).await;

    let incoming = IncomingMessage {
        chat_id: msg.chat.id.0,
        author_id: msg.from().map(|u| u.id.0),
        text: msg.text(),
    };

    let Some((participant, value)) =
        classify_message(&incoming, handler.settings.chat_id, me.user.id.0)
    else {
        return Ok(());
    };

    let feedback = CommandFeedback::new(bot, msg.chat.id).replying_to(msg.id);

    let sent = match handler.controller.submit_entry(participant, value).await {
        Ok(EntryOutcome::Accepted(numbers)) => {
            let summary = numbers
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            feedback
                .success(&format!("{value} is yours. Your numbers: {summary}"))
                .await?
        }
        Ok(EntryOutcome::Rejected(rejection)) => feedback.rejected(&rejection.to_string()).await?,
        Err(e) => {
            tracing::error!("Failed to save entry {} from user {}: {}", value, participant, e);
            feedback
                .error("Your number could not be saved, please try again")
                .await?
        }
    };

    handler.tracker.track(sent.id).await;
    Ok(())
}
