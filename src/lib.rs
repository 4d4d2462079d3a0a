//! # Giveaway Bot
//!
//! A Telegram bot running a weekly number-guessing giveaway in one chat.
//!
//! ## Features
//! - Participants post numbers in the giveaway chat; each number has one owner
//! - Weekly draw at a configured weekday and time
//! - Results announced with the winner and a reminder to the prize giver
//! - Every round archived in a JSON state file

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Giveaway state, entry rules and draws
pub mod giveaway;
/// Background services like the draw job and health checks
pub mod services;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
