#![allow(clippy::unwrap_used)]

use chrono::{NaiveTime, Weekday};
use giveaway_bot::config::{Config, DEFAULT_STATE_FILE};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "GIVEAWAY_CHAT_ID",
    "PRIZE_GIVER_ID",
    "GIVEAWAY_MIN",
    "GIVEAWAY_MAX",
    "POLL_INTERVAL_SECS",
    "DRAW_WEEKDAY",
    "DRAW_TIME",
    "STATE_FILE",
    "HTTP_PORT",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

fn set_required() {
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("GIVEAWAY_CHAT_ID", "-1001234567890");
    env::set_var("PRIZE_GIVER_ID", "424242");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("GIVEAWAY_MIN", "10");
    env::set_var("GIVEAWAY_MAX", "20");
    env::set_var("POLL_INTERVAL_SECS", "5");
    env::set_var("DRAW_WEEKDAY", "Friday");
    env::set_var("DRAW_TIME", "18:30");
    env::set_var("STATE_FILE", "/tmp/giveaway.json");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.giveaway.chat_id, -1001234567890);
    assert_eq!(config.giveaway.prize_giver_id, 424242);
    assert_eq!(config.giveaway.range.min(), 10);
    assert_eq!(config.giveaway.range.max(), 20);
    assert_eq!(config.giveaway.schedule.weekday, Weekday::Fri);
    assert_eq!(config.giveaway.schedule.time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    assert_eq!(config.poll_interval, Duration::from_secs(5));
    assert_eq!(config.state_file, PathBuf::from("/tmp/giveaway.json"));
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    let config = Config::from_env().unwrap();

    assert_eq!(config.giveaway.range.min(), 1);
    assert_eq!(config.giveaway.range.max(), 90);
    assert_eq!(config.giveaway.schedule.weekday, Weekday::Tue);
    assert_eq!(config.giveaway.schedule.time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    assert_eq!(config.poll_interval, Duration::from_secs(60));
    assert_eq!(config.state_file, PathBuf::from(DEFAULT_STATE_FILE));
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("GIVEAWAY_CHAT_ID must be set"));

    env::set_var("GIVEAWAY_CHAT_ID", "-100123");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("PRIZE_GIVER_ID must be set"));

    clear_env();
}

#[test]
fn test_config_empty_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_rejects_malformed_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    let cases = [
        ("GIVEAWAY_CHAT_ID", "not-a-number", "Invalid GIVEAWAY_CHAT_ID"),
        ("GIVEAWAY_CHAT_ID", "0", "Invalid GIVEAWAY_CHAT_ID"),
        ("PRIZE_GIVER_ID", "-5", "Invalid PRIZE_GIVER_ID"),
        ("PRIZE_GIVER_ID", "0", "Invalid PRIZE_GIVER_ID"),
        ("GIVEAWAY_MIN", "ten", "Invalid GIVEAWAY_MIN"),
        ("GIVEAWAY_MIN", "100", "Invalid GIVEAWAY_MIN/GIVEAWAY_MAX"),
        ("POLL_INTERVAL_SECS", "0", "Invalid POLL_INTERVAL_SECS"),
        ("DRAW_WEEKDAY", "someday", "Invalid DRAW_WEEKDAY"),
        ("DRAW_TIME", "25:00", "Invalid DRAW_TIME"),
        ("HTTP_PORT", "-1", "Invalid HTTP_PORT"),
    ];

    for (var, value, expected) in cases {
        clear_env();
        set_required();
        env::set_var(var, value);

        let result = Config::from_env();
        assert!(result.is_err(), "{var}={value} should be rejected");
        let error_msg = result.unwrap_err().to_string();
        assert!(
            error_msg.contains(expected),
            "{var}={value}: expected '{expected}' in '{error_msg}'"
        );
    }

    clear_env();
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("GIVEAWAY_MAX", "  50  ");
    env::set_var("HTTP_PORT", "  3000  ");
    env::set_var("DRAW_WEEKDAY", "  sun ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.giveaway.range.max(), 50);
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.giveaway.schedule.weekday, Weekday::Sun);

    clear_env();
}
