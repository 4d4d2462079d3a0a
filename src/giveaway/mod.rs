//! Giveaway core: state, entry rules, draws and the controller tying them
//! to persistence. Nothing in here talks to Telegram.

pub mod controller;
pub mod draw;
pub mod entry;
pub mod schedule;
pub mod store;

pub use controller::{EntryOutcome, GiveawayController, GiveawayStatus};
pub use draw::DrawOutcome;
pub use entry::EntryRejection;
pub use schedule::{DrawSchedule, NumberRange};
pub use store::{
    check_invariants, ArchiveEntry, GiveawayRound, GiveawayState, GiveawayStore, ParticipantId,
    StoreError,
};
