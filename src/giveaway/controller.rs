use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::draw::{close_round, is_round_over, DrawOutcome};
use super::entry::{submit_entry, EntryRejection};
use super::schedule::{DrawSchedule, NumberRange};
use super::store::{ArchiveEntry, GiveawayStore, ParticipantId, StoreError};
use crate::utils::logging::{log_draw, log_entry_accepted, log_entry_rejected};

/// What happened to a submitted number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Recorded; carries the participant's full list after the submission.
    Accepted(Vec<i64>),
    Rejected(EntryRejection),
}

/// Point-in-time view of the giveaway for commands and health checks.
#[derive(Debug, Clone)]
pub struct GiveawayStatus {
    pub end_time: Option<DateTime<Utc>>,
    pub entry_count: usize,
    pub participant_count: usize,
    pub archived_rounds: usize,
    pub state_file: PathBuf,
}

/// Owns the shared store and serialises both mutation paths (entries and
/// draws) through one async mutex. Each operation holds the lock across its
/// read, mutate and persist steps.
#[derive(Clone)]
pub struct GiveawayController {
    store: Arc<Mutex<GiveawayStore>>,
    range: NumberRange,
    schedule: DrawSchedule,
}

impl GiveawayController {
    pub fn new(store: GiveawayStore, range: NumberRange, schedule: DrawSchedule) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            range,
            schedule,
        }
    }

    pub fn range(&self) -> NumberRange {
        self.range
    }

    pub fn schedule(&self) -> DrawSchedule {
        self.schedule
    }

    /// Validates and records `value` for `participant`, persisting on success.
    ///
    /// Rejections are an `Ok` outcome; only persistence failures are errors.
    pub async fn submit_entry(
        &self,
        participant: ParticipantId,
        value: i64,
    ) -> Result<EntryOutcome, StoreError> {
        let mut store = self.store.lock().await;
        let round = &mut store.state_mut().current_giveaway;

        if let Err(rejection) = submit_entry(round, &self.range, participant, value) {
            log_entry_rejected(participant, value, &rejection.to_string());
            return Ok(EntryOutcome::Rejected(rejection));
        }
        let entries = round.entries_of(participant).to_vec();

        if let Err(e) = store.save().await {
            // Keep memory in line with what is on disk.
            if let Some(values) = store
                .state_mut()
                .current_giveaway
                .entries
                .get_mut(&participant)
            {
                values.retain(|v| *v != value);
            }
            return Err(e);
        }

        log_entry_accepted(participant, value, entries.len());
        Ok(EntryOutcome::Accepted(entries))
    }

    /// Draws if the round has ended by `now`. At most one draw happens per
    /// expired round even when ticks overlap, since the check runs under the lock.
    pub async fn draw_if_due(&self, now: DateTime<Utc>) -> Result<Option<DrawOutcome>, StoreError> {
        let mut store = self.store.lock().await;
        if !is_round_over(store.state(), now) {
            return Ok(None);
        }

        let winning_number = self.range.draw(&mut rand::thread_rng());
        let outcome = close_round(store.state_mut(), winning_number, &self.schedule, now);
        store.save().await?;

        log_draw(&outcome);
        Ok(Some(outcome))
    }

    /// Closes the round with a fixed winning number regardless of end time.
    pub async fn draw_with_number(
        &self,
        winning_number: i64,
        now: DateTime<Utc>,
    ) -> Result<DrawOutcome, StoreError> {
        let mut store = self.store.lock().await;
        let outcome = close_round(store.state_mut(), winning_number, &self.schedule, now);
        store.save().await?;

        log_draw(&outcome);
        Ok(outcome)
    }

    pub async fn entries_of(&self, participant: ParticipantId) -> Vec<i64> {
        let store = self.store.lock().await;
        store.state().current_giveaway.entries_of(participant).to_vec()
    }

    pub async fn recent_archive(&self, limit: usize) -> Vec<(String, ArchiveEntry)> {
        let store = self.store.lock().await;
        store
            .state()
            .recent_archive(limit)
            .into_iter()
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect()
    }

    pub async fn status(&self) -> GiveawayStatus {
        let store = self.store.lock().await;
        let state = store.state();
        GiveawayStatus {
            end_time: DateTime::from_timestamp(state.current_giveaway.end_time, 0),
            entry_count: state.current_giveaway.entry_count(),
            participant_count: state.current_giveaway.participant_count(),
            archived_rounds: state.archive.len(),
            state_file: store.path().to_path_buf(),
        }
    }
}
