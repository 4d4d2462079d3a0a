//! MarkdownV2 text for draw announcements and command replies.
//!
//! Pure functions: names are resolved by the caller and passed in through
//! `name_of`, so everything here can be tested without a bot.

use crate::giveaway::{ArchiveEntry, DrawOutcome, DrawSchedule, GiveawayStatus, NumberRange};
use crate::utils::datetime::{format_datetime, format_draw_date};
use crate::utils::markdown::{bold, escape_markdown, mention, number_list};

/// Messages posted after a draw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub results: String,
    /// Only present when somebody won.
    pub prize_reminder: Option<String>,
}

pub fn render_announcement(
    outcome: &DrawOutcome,
    prize_giver_id: u64,
    name_of: impl Fn(u64) -> String,
) -> Announcement {
    let mut results = format!(
        "🎉 {}\n\n{} {}\n",
        bold(&format!("Giveaway for {}", format_draw_date(&outcome.draw_date))),
        bold("Winning number:"),
        outcome.winning_number
    );

    let prize_reminder = match outcome.winner {
        Some(winner) => {
            let winner_mention = mention(winner, &name_of(winner));
            results.push_str(&format!("{} {}\n", bold("Winner:"), winner_mention));
            results.push_str(&format!(
                "{} {}\n",
                bold("Winner's guesses:"),
                number_list(&outcome.winner_entries)
            ));

            Some(format!(
                "Congratulations {}\\! {} remember to give them their prize\\!",
                winner_mention,
                mention(prize_giver_id, &name_of(prize_giver_id))
            ))
        }
        None => {
            results.push_str(&format!("{} Nobody \\.\\.\\.\n", bold("Winner:")));
            None
        }
    };

    results.push_str(&format!(
        "\n⏭️ Next draw: {}",
        escape_markdown(&format_datetime(&outcome.next_end_time))
    ));

    Announcement {
        results,
        prize_reminder,
    }
}

pub fn render_rules(range: &NumberRange, schedule: &DrawSchedule, status: &GiveawayStatus) -> String {
    let next = status
        .end_time
        .map(|t| format_datetime(&t))
        .unwrap_or_else(|| "not scheduled".to_string());

    format!(
        "🎲 {}\n\nPost a number from {} in this chat to enter\\. Each number can only be held by one person, \
         but you can pick as many free numbers as you like\\.\n\nDraws happen {}\\. Next draw: {}",
        bold("Welcome to the weekly giveaway!"),
        escape_markdown(&range.to_string()),
        escape_markdown(&schedule.to_string()),
        escape_markdown(&next)
    )
}

pub fn render_status(status: &GiveawayStatus, caller_entries: &[i64]) -> String {
    let next = status
        .end_time
        .map(|t| format_datetime(&t))
        .unwrap_or_else(|| "not scheduled".to_string());

    let mine = if caller_entries.is_empty() {
        "none yet".to_string()
    } else {
        number_list(caller_entries)
    };

    format!(
        "📊 {}\n\n⏰ Next draw: {}\n🔢 Numbers taken: {}\n👥 Participants: {}\n🎟️ Your numbers: {}",
        bold("Giveaway status"),
        escape_markdown(&next),
        status.entry_count,
        status.participant_count,
        mine
    )
}

pub fn render_history(rounds: &[(String, ArchiveEntry)], name_of: impl Fn(u64) -> String) -> String {
    if rounds.is_empty() {
        return "📜 No draws have happened yet\\.".to_string();
    }

    let mut text = format!("📜 {}\n\n", bold("Past draws"));
    for (key, round) in rounds {
        let winner = match round.winner() {
            Some(id) => mention(id, &name_of(id)),
            None => "nobody".to_string(),
        };
        text.push_str(&format!(
            "• {}: {} won by {}\n",
            escape_markdown(key),
            round.winning_number,
            winner
        ));
    }
    text
}
