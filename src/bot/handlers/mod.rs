pub mod entry;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*, types::Me};

use crate::bot::commands::Command;
use crate::bot::tracker::MessageTracker;
use crate::config::GiveawaySettings;
use crate::giveaway::GiveawayController;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Everything the update handlers need, cloned into each endpoint.
#[derive(Clone)]
pub struct BotHandler {
    pub controller: GiveawayController,
    pub settings: GiveawaySettings,
    pub tracker: MessageTracker,
}

impl BotHandler {
    pub fn new(
        controller: GiveawayController,
        settings: GiveawaySettings,
        tracker: MessageTracker,
    ) -> Self {
        Self {
            controller,
            settings,
            tracker,
        }
    }

    /// Remembers messages posted in the giveaway chat so a draw can purge them.
    pub async fn track_if_designated(&self, msg: &Message) {
        if msg.chat.id.0 != self.settings.chat_id {
            return;
        }
        if let Some(pinned) = msg.pinned_message() {
            self.tracker.mark_pinned(pinned.id).await;
        }
        self.tracker.track(msg.id).await;
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let commands = self.clone();
        let entries = self.clone();

        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let handler = commands.clone();
                        async move { message::command_handler(bot, msg, cmd, handler).await }
                    }),
            )
            .branch(dptree::endpoint(move |bot: Bot, msg: Message, me: Me| {
                let handler = entries.clone();
                async move { entry::entry_handler(bot, msg, me, handler).await }
            }))
    }
}
