use anyhow::{anyhow, Result};
use chrono::{NaiveTime, Weekday};

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs are private chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs are groups or supergroups (around -1000000000000)
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

pub fn validate_telegram_user_id(user_id: u64) -> Result<()> {
    if user_id == 0 {
        return Err(anyhow!("User ID cannot be zero"));
    }
    Ok(())
}

pub fn validate_number_range(min: i64, max: i64) -> Result<()> {
    if min < 0 {
        return Err(anyhow!("Range minimum cannot be negative, entries are plain digits"));
    }

    if min > max {
        return Err(anyhow!("Range minimum {} is greater than maximum {}", min, max));
    }

    // Oversized entries parse as i64::MAX and must stay out of range
    if max == i64::MAX {
        return Err(anyhow!("Range maximum must be below {}", i64::MAX));
    }

    Ok(())
}

pub fn validate_poll_interval(secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(anyhow!("Poll interval must be at least one second"));
    }

    // A draw detected a day late is not a draw anymore
    if secs > 86_400 {
        return Err(anyhow!("Poll interval cannot exceed one day"));
    }

    Ok(())
}

/// Accepts full or three-letter English weekday names, any case.
pub fn parse_weekday(input: &str) -> Result<Weekday> {
    input
        .trim()
        .parse::<Weekday>()
        .map_err(|_| anyhow!("Invalid weekday '{}', expected e.g. 'tue' or 'Tuesday'", input.trim()))
}

/// Parses `HH:MM` (24h).
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| anyhow!("Invalid time '{}', expected HH:MM", input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_telegram_chat_id_valid() {
        assert!(validate_telegram_chat_id(12345).is_ok());
        assert!(validate_telegram_chat_id(-987654321).is_ok());
        assert!(validate_telegram_chat_id(-1001234567890).is_ok());
    }

    #[test]
    fn test_validate_telegram_chat_id_invalid() {
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-3000000000000).is_err());
        assert!(validate_telegram_chat_id(3000000000).is_err());
    }

    #[test]
    fn test_validate_number_range() {
        assert!(validate_number_range(1, 90).is_ok());
        assert!(validate_number_range(0, 0).is_ok());
        assert!(validate_number_range(91, 90).is_err());
        assert!(validate_number_range(-1, 90).is_err());
        assert!(validate_number_range(1, i64::MAX - 1).is_ok());
        assert!(validate_number_range(1, i64::MAX).is_err());
    }

    #[test]
    fn test_validate_poll_interval() {
        assert!(validate_poll_interval(5).is_ok());
        assert!(validate_poll_interval(60).is_ok());
        assert!(validate_poll_interval(0).is_err());
        assert!(validate_poll_interval(86_401).is_err());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("tue").ok(), Some(Weekday::Tue));
        assert_eq!(parse_weekday(" Tuesday ").ok(), Some(Weekday::Tue));
        assert_eq!(parse_weekday("SUN").ok(), Some(Weekday::Sun));
        assert!(parse_weekday("tomorrow").is_err());
        assert!(parse_weekday("").is_err());
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("22:00").ok(), NaiveTime::from_hms_opt(22, 0, 0));
        assert_eq!(parse_time_of_day(" 07:30 ").ok(), NaiveTime::from_hms_opt(7, 30, 0));
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
        assert!(parse_time_of_day("noon").is_err());
    }
}
