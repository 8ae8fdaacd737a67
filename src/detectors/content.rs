use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::FilterConfig,
    domain::{Detection, SpamLogEntry, AGENT_CONTENT},
};

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[^\s]+").expect("valid url regex"));

/// Punctuation that ordinary prose is allowed to contain.
const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '!', '?', '-', '\'', '"', '(', ')'];

/// Six heuristics over the extracted message text, evaluated in fixed order.
/// The first one that fires decides the result; later checks are not run.
pub fn check(message: &str, config: &FilterConfig) -> Detection {
    if let Some(entry) = check_url_count(message, config) {
        return Detection::Spam(entry);
    }
    if let Some(entry) = check_caps_ratio(message, config) {
        return Detection::Spam(entry);
    }
    if let Some(entry) = check_word_count(message, config) {
        return Detection::Spam(entry);
    }
    if let Some(entry) = check_keywords(message, config) {
        return Detection::Spam(entry);
    }
    if let Some(entry) = check_repetition(message) {
        return Detection::Spam(entry);
    }
    if let Some(entry) = check_special_chars(message, config) {
        return Detection::Spam(entry);
    }
    Detection::Ham
}

fn check_url_count(message: &str, config: &FilterConfig) -> Option<SpamLogEntry> {
    let url_count = URL_REGEX.find_iter(message).count();
    if url_count > config.max_urls {
        return Some(SpamLogEntry::with_evidence(
            AGENT_CONTENT,
            format!(
                "Too many URLs in message ({url_count} found, max {} allowed)",
                config.max_urls
            ),
            url_count as f64,
        ));
    }
    None
}

fn check_caps_ratio(message: &str, config: &FilterConfig) -> Option<SpamLogEntry> {
    let letters = message.chars().filter(char::is_ascii_alphabetic).count();
    // Too few letters to say anything about shouting.
    if letters < 10 {
        return None;
    }

    let uppercase = message.chars().filter(char::is_ascii_uppercase).count();
    let caps_percentage = uppercase as f64 / letters as f64 * 100.0;
    if caps_percentage > config.max_caps_percentage {
        return Some(SpamLogEntry::with_evidence(
            AGENT_CONTENT,
            format!(
                "Excessive uppercase text ({caps_percentage:.0}% caps, max {:.0}% allowed)",
                config.max_caps_percentage
            ),
            caps_percentage,
        ));
    }
    None
}

fn check_word_count(message: &str, config: &FilterConfig) -> Option<SpamLogEntry> {
    let word_count = message.split_whitespace().count();
    if word_count < config.min_words {
        return Some(SpamLogEntry::with_evidence(
            AGENT_CONTENT,
            format!(
                "Message too short ({word_count} words, min {} required)",
                config.min_words
            ),
            word_count as f64,
        ));
    }
    None
}

fn check_keywords(message: &str, config: &FilterConfig) -> Option<SpamLogEntry> {
    let message_lower = message.to_lowercase();
    // List order is the tie-break when several keywords occur. Keywords are
    // operator data and may arrive in any casing.
    for keyword in &config.spam_keywords {
        if message_lower.contains(&keyword.to_lowercase()) {
            return Some(SpamLogEntry::new(
                AGENT_CONTENT,
                format!("Spam keyword detected: \"{keyword}\""),
            ));
        }
    }
    None
}

fn check_repetition(message: &str) -> Option<SpamLogEntry> {
    if has_char_run(message, 6) || has_repeated_block(message, 2, 4) {
        return Some(SpamLogEntry::new(
            AGENT_CONTENT,
            "Repetitive text pattern detected",
        ));
    }
    None
}

fn check_special_chars(message: &str, config: &FilterConfig) -> Option<SpamLogEntry> {
    let total_chars = message.chars().count();
    if total_chars == 0 {
        return None;
    }

    let special_count = message
        .chars()
        .filter(|ch| {
            !ch.is_ascii_alphanumeric() && !ch.is_whitespace() && !ALLOWED_PUNCTUATION.contains(ch)
        })
        .count();
    let special_percentage = special_count as f64 / total_chars as f64 * 100.0;
    if special_percentage > config.max_special_char_percentage {
        return Some(SpamLogEntry::with_evidence(
            AGENT_CONTENT,
            format!("Excessive special characters ({special_percentage:.0}% of message)"),
            special_percentage,
        ));
    }
    None
}

/// Any single character repeated `min_run` or more times consecutively.
fn has_char_run(message: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut previous: Option<char> = None;
    for ch in message.chars() {
        if previous == Some(ch) {
            run += 1;
        } else {
            run = 1;
            previous = Some(ch);
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

/// Longest block length considered by the repetition scan. Bounds the pass
/// to O(period * length) on attacker-sized messages.
const MAX_REPEAT_PERIOD: usize = 64;

/// Any block of at least `min_len` bytes occurring `min_repeats` or more
/// times back to back, e.g. "abcabcabcabc". A block repeated k times is a
/// run of (k - 1) * period positions where each byte equals the byte one
/// period earlier, so one linear pass per candidate period suffices.
fn has_repeated_block(message: &str, min_len: usize, min_repeats: usize) -> bool {
    let bytes = message.as_bytes();
    let max_period = MAX_REPEAT_PERIOD.min(bytes.len() / min_repeats);
    for period in min_len..=max_period {
        let needed = period * (min_repeats - 1);
        let mut run = 0usize;
        for i in period..bytes.len() {
            if bytes[i] == bytes[i - period] {
                run += 1;
                if run >= needed {
                    return true;
                }
            } else {
                run = 0;
            }
        }
    }
    false
}
