use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::giveaway::{DrawSchedule, NumberRange};
use crate::utils::validation::{
    parse_time_of_day, parse_weekday, validate_poll_interval, validate_telegram_chat_id,
    validate_telegram_user_id,
};

pub const DEFAULT_STATE_FILE: &str = "./data/giveaway_data.json";

/// Giveaway rules shared by the controller, handlers and the draw service.
#[derive(Debug, Clone)]
pub struct GiveawaySettings {
    /// The only chat where entries count and results are posted.
    pub chat_id: i64,
    pub range: NumberRange,
    pub schedule: DrawSchedule,
    /// Who hands out the prize; mentioned after each won draw.
    pub prize_giver_id: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub giveaway: GiveawaySettings,
    pub poll_interval: Duration,
    pub state_file: PathBuf,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let chat_id = required("GIVEAWAY_CHAT_ID")?
            .trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("Invalid GIVEAWAY_CHAT_ID"))?;
        validate_telegram_chat_id(chat_id).context("Invalid GIVEAWAY_CHAT_ID")?;

        let prize_giver_id = required("PRIZE_GIVER_ID")?
            .trim()
            .parse::<u64>()
            .map_err(|_| anyhow!("Invalid PRIZE_GIVER_ID"))?;
        validate_telegram_user_id(prize_giver_id).context("Invalid PRIZE_GIVER_ID")?;

        let poll_secs = parse_or("POLL_INTERVAL_SECS", 60_u64)?;
        validate_poll_interval(poll_secs).context("Invalid POLL_INTERVAL_SECS")?;

        let http_port = parse_or("HTTP_PORT", 3000_u16)?;

        Ok(Config {
            telegram_bot_token: token,
            giveaway: GiveawaySettings {
                chat_id,
                range: range_from_env()?,
                schedule: schedule_from_env()?,
                prize_giver_id,
            },
            poll_interval: Duration::from_secs(poll_secs),
            state_file: state_file_from_env(),
            http_port,
        })
    }
}

/// Entry range from `GIVEAWAY_MIN` / `GIVEAWAY_MAX`, defaulting to 1-90.
pub fn range_from_env() -> Result<NumberRange> {
    let min = parse_or("GIVEAWAY_MIN", 1_i64)?;
    let max = parse_or("GIVEAWAY_MAX", 90_i64)?;
    NumberRange::new(min, max).context("Invalid GIVEAWAY_MIN/GIVEAWAY_MAX")
}

/// Draw slot from `DRAW_WEEKDAY` / `DRAW_TIME`, defaulting to Tuesday 22:00 UTC.
pub fn schedule_from_env() -> Result<DrawSchedule> {
    let weekday = parse_weekday(&non_empty_or("DRAW_WEEKDAY", "tue"))
        .context("Invalid DRAW_WEEKDAY")?;
    let time = parse_time_of_day(&non_empty_or("DRAW_TIME", "22:00"))
        .context("Invalid DRAW_TIME")?;
    Ok(DrawSchedule::new(weekday, time))
}

pub fn state_file_from_env() -> PathBuf {
    PathBuf::from(non_empty_or("STATE_FILE", DEFAULT_STATE_FILE))
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(anyhow!("{key} must be set")),
    }
}

fn non_empty_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid {key}")),
        _ => Ok(default),
    }
}
