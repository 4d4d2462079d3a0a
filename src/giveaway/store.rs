use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::schedule::NumberRange;
use crate::utils::logging::{log_store_error, log_store_operation};

/// Telegram user id of a participant.
pub type ParticipantId = u64;

/// Numbers picked per participant, in submission order.
pub type Entries = BTreeMap<ParticipantId, Vec<i64>>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("State file I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("State file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("State file {0} already exists")]
    AlreadyExists(PathBuf),
}

/// The round currently accepting entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayRound {
    #[serde(default)]
    pub entries: Entries,
    /// Epoch seconds at which the round closes.
    pub end_time: i64,
}

impl GiveawayRound {
    pub fn new(end_time: i64) -> Self {
        Self {
            entries: Entries::new(),
            end_time,
        }
    }

    /// Participant currently holding `value`, if any.
    pub fn holder_of(&self, value: i64) -> Option<ParticipantId> {
        self.entries
            .iter()
            .find(|(_, values)| values.contains(&value))
            .map(|(participant, _)| *participant)
    }

    pub fn entries_of(&self, participant: ParticipantId) -> &[i64] {
        self.entries
            .get(&participant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn participant_count(&self) -> usize {
        self.entries.values().filter(|values| !values.is_empty()).count()
    }
}

/// Closed round as it looked at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntry {
    #[serde(default)]
    pub entries: Entries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    pub winning_number: i64,
}

impl ArchiveEntry {
    pub fn winner(&self) -> Option<ParticipantId> {
        self.entries
            .iter()
            .find(|(_, values)| values.contains(&self.winning_number))
            .map(|(participant, _)| *participant)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayState {
    pub current_giveaway: GiveawayRound,
    #[serde(default)]
    pub archive: BTreeMap<String, ArchiveEntry>,
}

impl GiveawayState {
    pub fn new(end_time: i64) -> Self {
        Self {
            current_giveaway: GiveawayRound::new(end_time),
            archive: BTreeMap::new(),
        }
    }

    /// Most recent archived rounds first, ordered by date then same-day sequence.
    pub fn recent_archive(&self, limit: usize) -> Vec<(&String, &ArchiveEntry)> {
        let mut rounds: Vec<_> = self.archive.iter().collect();
        rounds.sort_by(|(a, _), (b, _)| archive_order(b).cmp(&archive_order(a)));
        rounds.truncate(limit);
        rounds
    }
}

/// `YYYYMMDD` is the first draw of a day, `YYYYMMDD-N` the N-th.
fn archive_order(key: &str) -> (&str, u64) {
    match key.split_once('-') {
        Some((date, n)) => (date, n.parse().unwrap_or(u64::MAX)),
        None => (key, 1),
    }
}

/// Giveaway state bound to the JSON file it lives in.
///
/// Every mutation is followed by [`GiveawayStore::save`], which rewrites the whole
/// document through a temp file and a rename.
#[derive(Debug)]
pub struct GiveawayStore {
    path: PathBuf,
    state: GiveawayState,
}

impl GiveawayStore {
    /// Reads the state file. A missing or malformed file is an error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        log_store_operation("load", &path, None);

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        let state = parse_state(&path, &raw)?;
        Ok(Self { path, state })
    }

    /// Writes a fresh state file. Refuses to clobber an existing one.
    pub async fn create(path: impl AsRef<Path>, state: GiveawayState) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StoreError::AlreadyExists(path));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let store = Self { path, state };
        store.save().await?;
        Ok(store)
    }

    pub async fn save(&self) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(&self.state).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = temp_path(&self.path);
        let result = match tokio::fs::write(&tmp, body.as_bytes()).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                log_store_operation(
                    "save",
                    &self.path,
                    Some(&format!(
                        "{} entries, {} archived",
                        self.state.current_giveaway.entry_count(),
                        self.state.archive.len()
                    )),
                );
                Ok(())
            }
            Err(e) => {
                log_store_error("save", &self.path, &e.to_string());
                if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                    log_store_operation("remove temp file", &tmp, Some(&cleanup.to_string()));
                }
                Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &GiveawayState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GiveawayState {
        &mut self.state
    }
}

/// Lists every way the current round breaks the entry invariants. Empty means
/// the state is consistent with `range`.
pub fn check_invariants(state: &GiveawayState, range: &NumberRange) -> Vec<String> {
    let mut problems = Vec::new();
    let mut holders: BTreeMap<i64, ParticipantId> = BTreeMap::new();

    for (participant, values) in &state.current_giveaway.entries {
        let mut seen = BTreeSet::new();
        for value in values {
            if !seen.insert(*value) {
                problems.push(format!("user {participant} holds {value} more than once"));
            }
            if !range.contains(*value) {
                problems.push(format!("user {participant} holds {value}, outside {range}"));
            }
            match holders.get(value).copied() {
                Some(other) if other != *participant => problems.push(format!(
                    "{value} is held by both user {other} and user {participant}"
                )),
                _ => {
                    holders.insert(*value, *participant);
                }
            }
        }
    }

    problems
}

/// Parses a state document, attributing errors to `path`.
pub fn parse_state(path: &Path, raw: &str) -> Result<GiveawayState, StoreError> {
    serde_json::from_str(raw).map_err(|source| {
        log_store_error("parse", path, &source.to_string());
        StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
