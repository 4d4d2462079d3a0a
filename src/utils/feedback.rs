use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};
use crate::utils::markdown::escape_markdown;

/// Feedback types for different outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Rejected,
    Error,
}

impl FeedbackType {
    pub fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Rejected => "❎",
            FeedbackType::Error => "❌",
        }
    }
}

/// Builds the MarkdownV2 body of a feedback message.
pub fn format_feedback(feedback_type: FeedbackType, message: &str) -> String {
    if message.is_empty() {
        return feedback_type.emoji().to_string();
    }
    format!("{} {}", feedback_type.emoji(), escape_markdown(message))
}

/// Centralized feedback for entries and commands, optionally threaded as a
/// reply to the message that triggered it.
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
    reply_to: Option<MessageId>,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id, reply_to: None }
    }

    pub fn replying_to(mut self, message_id: MessageId) -> Self {
        self.reply_to = Some(message_id);
        self
    }

    /// Send a message that is already MarkdownV2 formatted
    pub async fn send_markdown(&self, text: String) -> ResponseResult<Message> {
        let request = self
            .bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2);

        match self.reply_to {
            Some(id) => request.reply_to_message_id(id).await,
            None => request.await,
        }
    }

    /// Send immediate feedback message
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.send_markdown(format_feedback(feedback_type, message)).await
    }

    /// Send success feedback
    pub async fn success(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Success, message).await
    }

    /// Send rejection feedback for a refused entry
    pub async fn rejected(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Rejected, message).await
    }

    /// Send error feedback
    pub async fn error(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, message).await
    }
}
