use chrono::{DateTime, NaiveDate, Utc};

use super::schedule::DrawSchedule;
use super::store::{ArchiveEntry, Entries, GiveawayState, ParticipantId};

/// Result of closing a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Key the closed round was archived under.
    pub archive_key: String,
    pub draw_date: NaiveDate,
    pub winning_number: i64,
    pub winner: Option<ParticipantId>,
    /// Every number the winner submitted, empty without a winner.
    pub winner_entries: Vec<i64>,
    pub entry_count: usize,
    pub next_end_time: DateTime<Utc>,
}

pub fn is_round_over(state: &GiveawayState, now: DateTime<Utc>) -> bool {
    now.timestamp() >= state.current_giveaway.end_time
}

/// Archive key for a draw on `date`. The first draw of a day gets `YYYYMMDD`;
/// later draws on the same day get `-2`, `-3`, ... so nothing is overwritten.
pub fn archive_key(state: &GiveawayState, date: NaiveDate) -> String {
    let base = date.format("%Y%m%d").to_string();
    if !state.archive.contains_key(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|key| !state.archive.contains_key(key))
        .unwrap_or(base)
}

/// Closes the current round with an already drawn `winning_number`: archives
/// it, clears entries and moves the end time to the next scheduled slot.
///
/// The caller persists the state afterwards.
pub fn close_round(
    state: &mut GiveawayState,
    winning_number: i64,
    schedule: &DrawSchedule,
    now: DateTime<Utc>,
) -> DrawOutcome {
    let winner = state.current_giveaway.holder_of(winning_number);
    let winner_entries = winner
        .map(|p| state.current_giveaway.entries_of(p).to_vec())
        .unwrap_or_default();

    let draw_date = now.date_naive();
    let key = archive_key(state, draw_date);

    let closed: Entries = std::mem::take(&mut state.current_giveaway.entries);
    let entry_count = closed.values().map(Vec::len).sum();

    state.archive.insert(
        key.clone(),
        ArchiveEntry {
            entries: closed,
            end_time: Some(state.current_giveaway.end_time),
            winning_number,
        },
    );

    let next_end_time = schedule.next_after(now);
    state.current_giveaway.end_time = next_end_time.timestamp();

    DrawOutcome {
        archive_key: key,
        draw_date,
        winning_number,
        winner,
        winner_entries,
        entry_count,
        next_end_time,
    }
}
