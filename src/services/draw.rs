use chrono::Utc;
use std::time::Duration;
use teloxide::{
    prelude::*,
    types::{MessageId, ParseMode},
};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::render::render_announcement;
use crate::bot::tracker::MessageTracker;
use crate::bot::{display_names, name_lookup};
use crate::config::GiveawaySettings;
use crate::giveaway::{DrawOutcome, GiveawayController};
use crate::utils::logging::{log_chat_error, log_system_event};

type ServiceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Polls the giveaway on a fixed interval and runs the draw once the round
/// has ended: the controller commits the draw, then the chat is purged and
/// the result announced.
pub struct DrawService {
    context: DrawContext,
    poll_interval: Duration,
    scheduler: JobScheduler,
}

#[derive(Clone)]
struct DrawContext {
    bot: Bot,
    controller: GiveawayController,
    settings: GiveawaySettings,
    tracker: MessageTracker,
}

impl DrawService {
    pub async fn new(
        bot: Bot,
        controller: GiveawayController,
        settings: GiveawaySettings,
        tracker: MessageTracker,
        poll_interval: Duration,
    ) -> ServiceResult<Self> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            context: DrawContext {
                bot,
                controller,
                settings,
                tracker,
            },
            poll_interval,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> ServiceResult<()> {
        let context = self.context.clone();

        let draw_job = Job::new_repeated_async(self.poll_interval, move |_uuid, _l| {
            let context = context.clone();
            Box::pin(async move {
                if let Err(e) = check_and_run_draw(&context).await {
                    tracing::error!("Draw check failed: {}", e);
                }
            })
        })?;

        self.scheduler.add(draw_job).await?;
        self.scheduler.start().await?;

        log_system_event(
            "Draw service started",
            Some(&format!(
                "polling every {}s, draws {}",
                self.poll_interval.as_secs(),
                self.context.settings.schedule
            )),
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> ServiceResult<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Runs one draw check immediately, so a round that ended while the bot
    /// was offline is drawn without waiting for the first poll.
    pub async fn check_draw_now(&self) -> ServiceResult<()> {
        check_and_run_draw(&self.context).await
    }
}

async fn check_and_run_draw(context: &DrawContext) -> ServiceResult<()> {
    let Some(outcome) = context.controller.draw_if_due(Utc::now()).await? else {
        return Ok(());
    };
    // Anything tracked after this belongs to the new round
    let cutoff = context.tracker.latest().await;

    // The draw is already persisted; chat failures below are logged, never undone.
    let chat_id = ChatId(context.settings.chat_id);
    let deleted = match cutoff {
        Some(cutoff) => purge_channel(&context.bot, chat_id, &context.tracker, cutoff).await,
        None => 0,
    };
    tracing::info!("Purged {} message(s) from chat {} after draw", deleted, chat_id.0);

    announce(context, &outcome).await
}

/// Deletes tracked, non-pinned messages up to `cutoff`. Returns how many were
/// removed.
async fn purge_channel(
    bot: &Bot,
    chat_id: ChatId,
    tracker: &MessageTracker,
    cutoff: MessageId,
) -> usize {
    let current_pin = match bot.get_chat(chat_id).await {
        Ok(chat) => chat.pinned_message.map(|m| m.id),
        Err(e) => {
            log_chat_error("get_chat", chat_id.0, &e.to_string());
            None
        }
    };

    let mut deleted = 0;
    for id in tracker.take_purgeable(cutoff, current_pin).await {
        match bot.delete_message(chat_id, id).await {
            Ok(_) => deleted += 1,
            Err(e) => log_chat_error("delete_message", chat_id.0, &e.to_string()),
        }
    }
    deleted
}

async fn announce(context: &DrawContext, outcome: &DrawOutcome) -> ServiceResult<()> {
    let chat_id = ChatId(context.settings.chat_id);
    let prize_giver = context.settings.prize_giver_id;

    let names = match outcome.winner {
        Some(winner) => display_names(&context.bot, chat_id, [winner, prize_giver]).await,
        None => Default::default(),
    };
    let announcement = render_announcement(outcome, prize_giver, name_lookup(&names));

    let mut messages = vec![announcement.results];
    messages.extend(announcement.prize_reminder);

    for text in messages {
        match context
            .bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            // Announcements are purged along with everything else at the next draw.
            Ok(sent) => context.tracker.track(sent.id).await,
            Err(e) => {
                log_chat_error("announce draw", chat_id.0, &e.to_string());
                return Err(e.into());
            }
        }
    }

    Ok(())
}
