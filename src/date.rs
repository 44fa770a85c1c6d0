use chrono::{FixedOffset, Utc};

// Dates are reported for the Asia/Kolkata timezone (UTC+05:30, no DST).
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

// Whole-phrase allow-list. Matching is exact against the normalized prompt
// so that prompts merely containing the word "date" still reach the model.
const DATE_PHRASES: &[&str] = &[
    "today's date",
    "todays date",
    "what is today's date",
    "what is todays date",
    "date today",
    "current date",
    "what date is it",
    "today date",
    "date",
];

/// Whether the prompt is asking for today's date.
pub fn is_date_query(prompt: &str) -> bool {
    let normalized = normalize(prompt);
    DATE_PHRASES.iter().any(|phrase| *phrase == normalized)
}

/// "Today is <weekday>, <month> <day>, <year>." for the current IST date.
pub fn todays_date_reply() -> String {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).unwrap();
    let today = Utc::now().with_timezone(&ist);
    format!("Today is {}.", today.format("%A, %B %-d, %Y"))
}

fn normalize(prompt: &str) -> String {
    prompt
        .trim()
        .trim_end_matches(['?', '!', '.'])
        .trim_end()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_listed_phrases() {
        assert!(is_date_query("What is today's date"));
        assert!(is_date_query("current date"));
        assert!(is_date_query("date"));
    }

    #[test]
    fn ignores_case_whitespace_and_trailing_punctuation() {
        assert!(is_date_query("  What date is it?  "));
        assert!(is_date_query("TODAY'S DATE!"));
    }

    #[test]
    fn does_not_match_prompts_that_merely_contain_date() {
        assert!(!is_date_query("update my calendar"));
        assert!(!is_date_query("what is the release date of rust 1.0"));
        assert!(!is_date_query("dates are a kind of fruit"));
    }

    #[test]
    fn reply_has_expected_shape() {
        let reply = todays_date_reply();
        assert!(reply.starts_with("Today is "));
        assert!(reply.ends_with('.'));
        // weekday, month day, year
        assert_eq!(reply.matches(", ").count(), 2);
    }
}
