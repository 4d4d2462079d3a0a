use thiserror::Error;

use super::schedule::NumberRange;
use super::store::{GiveawayRound, ParticipantId};

/// Why a submitted number was not recorded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRejection {
    #[error("You already chose {0}")]
    AlreadyChosenByYou(i64),

    #[error("{value} is out of range, pick a number from {range}")]
    OutOfRange { value: i64, range: NumberRange },

    #[error("{0} is already taken by someone else")]
    TakenBySomeoneElse(i64),
}

/// Parses message text as an entry: one run of ASCII digits, surrounding
/// whitespace allowed. Anything else is not an entry at all.
///
/// Digit runs that overflow `i64` come back as `i64::MAX`, which no valid
/// range contains.
pub fn parse_entry(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().unwrap_or(i64::MAX))
}

/// Identity of an incoming chat message, reduced to what entry routing needs.
#[derive(Debug, Clone, Copy)]
pub struct IncomingMessage<'a> {
    pub chat_id: i64,
    pub author_id: Option<u64>,
    pub text: Option<&'a str>,
}

/// Returns `(participant, value)` if the message is an entry for the
/// designated chat and was not written by the bot itself.
pub fn classify_message(
    message: &IncomingMessage<'_>,
    designated_chat: i64,
    bot_id: u64,
) -> Option<(ParticipantId, i64)> {
    if message.chat_id != designated_chat {
        return None;
    }
    let author = message.author_id.filter(|id| *id != bot_id)?;
    let value = parse_entry(message.text?)?;
    Some((author, value))
}

/// Checks a submission against the round and records it when valid.
///
/// Order matters: own duplicates, then range, then other participants.
pub fn submit_entry(
    round: &mut GiveawayRound,
    range: &NumberRange,
    participant: ParticipantId,
    value: i64,
) -> Result<(), EntryRejection> {
    if round.entries_of(participant).contains(&value) {
        return Err(EntryRejection::AlreadyChosenByYou(value));
    }

    if !range.contains(value) {
        return Err(EntryRejection::OutOfRange {
            value,
            range: *range,
        });
    }

    if round.holder_of(value).is_some() {
        return Err(EntryRejection::TakenBySomeoneElse(value));
    }

    round.entries.entry(participant).or_default().push(value);
    Ok(())
}
