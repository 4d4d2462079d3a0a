use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::giveaway::DrawOutcome;

/// Logs a recorded entry with consistent format
pub fn log_entry_accepted(participant: u64, value: i64, total: usize) {
    info!(
        "ENTRY_ACCEPTED: {} by user {} - now holds {} number(s)",
        value, participant, total
    );
}

/// Logs a rejected entry with consistent format
pub fn log_entry_rejected(participant: u64, value: i64, reason: &str) {
    warn!(
        "ENTRY_REJECTED: {} by user {} - {}",
        value, participant, reason
    );
}

/// Logs a completed draw with consistent format
pub fn log_draw(outcome: &DrawOutcome) {
    match outcome.winner {
        Some(winner) => info!(
            "DRAW: {} archived as {} - winning number {} won by user {} ({} entries), next draw at {}",
            outcome.draw_date,
            outcome.archive_key,
            outcome.winning_number,
            winner,
            outcome.entry_count,
            outcome.next_end_time
        ),
        None => info!(
            "DRAW: {} archived as {} - winning number {} unclaimed ({} entries), next draw at {}",
            outcome.draw_date,
            outcome.archive_key,
            outcome.winning_number,
            outcome.entry_count,
            outcome.next_end_time
        ),
    }
}

/// Logs chat API failures that are tolerated
pub fn log_chat_error(operation: &str, chat_id: i64, error: &str) {
    error!("CHAT_ERROR: {} in chat {} failed: {}", operation, chat_id, error);
}

/// Logs state file operations with consistent format
pub fn log_store_operation(operation: &str, path: &Path, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} - {}", operation, path.display(), d),
        None => debug!("STORE_OP: {} on {}", operation, path.display()),
    }
}

/// Logs state file errors with consistent format
pub fn log_store_error(operation: &str, path: &Path, error: &str) {
    error!("STORE_ERROR: {} on {} failed: {}", operation, path.display(), error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
