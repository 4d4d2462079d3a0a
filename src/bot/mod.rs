pub mod commands;
pub mod handlers;
pub mod render;
pub mod tracker;

use teloxide::prelude::*;

/// Best-effort display name of a chat member, for mentions.
pub async fn display_name(bot: &Bot, chat_id: ChatId, user_id: u64) -> String {
    match bot.get_chat_member(chat_id, UserId(user_id)).await {
        Ok(member) => member.user.full_name(),
        Err(e) => {
            tracing::debug!("Could not resolve user {} in chat {}: {}", user_id, chat_id.0, e);
            format!("user {user_id}")
        }
    }
}

/// Resolves several ids at once; unknown ids fall back to a generic label.
pub async fn display_names(
    bot: &Bot,
    chat_id: ChatId,
    user_ids: impl IntoIterator<Item = u64>,
) -> std::collections::HashMap<u64, String> {
    let mut names = std::collections::HashMap::new();
    for id in user_ids {
        if !names.contains_key(&id) {
            names.insert(id, display_name(bot, chat_id, id).await);
        }
    }
    names
}

pub(crate) fn name_lookup(
    names: &std::collections::HashMap<u64, String>,
) -> impl Fn(u64) -> String + '_ {
    move |id| names.get(&id).cloned().unwrap_or_else(|| format!("user {id}"))
}
