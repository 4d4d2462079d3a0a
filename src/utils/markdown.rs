//! Telegram MarkdownV2 helpers.
//!
//! Every character with a meaning in MarkdownV2 has to be escaped before it
//! reaches the API, otherwise the whole message is rejected.

const SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

/// Escapes text so it renders literally under MarkdownV2.
///
/// # Example
/// ```
/// use giveaway_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("Hello *world* (test)"), "Hello \\*world\\* \\(test\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Inline mention of a user by id; notifies them even without a username.
pub fn mention(user_id: u64, display_name: &str) -> String {
    format!("[{}](tg://user?id={})", escape_markdown(display_name), user_id)
}

pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}

/// Comma separated number list, escaped.
pub fn number_list(values: &[i64]) -> String {
    let joined = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    escape_markdown(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_basic_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("_italic_"), "\\_italic\\_");
        assert_eq!(escape_markdown("1-90."), "1\\-90\\.");
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_markdown(""), "");
        assert_eq!(escape_markdown("Giveaway 42"), "Giveaway 42");
    }

    #[test]
    fn test_mention() {
        assert_eq!(mention(42, "Ann (mod)"), "[Ann \\(mod\\)](tg://user?id=42)");
    }

    #[test]
    fn test_number_list() {
        assert_eq!(number_list(&[5, 17, 3]), "5, 17, 3");
        assert_eq!(number_list(&[]), "");
    }
}
