use chrono::{DateTime, Utc};

use crate::{
    config::FilterConfig,
    domain::{Detection, SpamLogEntry, Submission, AGENT_TIMESTAMP},
};

/// Validates the hidden render-time timestamp against the allowed submit
/// window. A missing or mangled timestamp means the client skipped rendering
/// the form, which no browser does.
pub fn check(submission: &Submission, now: DateTime<Utc>, config: &FilterConfig) -> Detection {
    let rendered_at = submission
        .get(&config.timestamp_field)
        .and_then(|value| value.trim().parse::<i64>().ok());

    let Some(rendered_at) = rendered_at else {
        return Detection::Spam(SpamLogEntry::new(AGENT_TIMESTAMP, "Timestamp field missing"));
    };

    // Saturating keeps a hostile extreme timestamp (i64::MIN/MAX) from
    // overflowing; a saturated elapsed still lands outside the window.
    let elapsed = now.timestamp().saturating_sub(rendered_at);

    // Clock skew can make this negative; that still lands in the too-quick
    // branch, which is the right verdict.
    if elapsed < config.min_submit_secs {
        return Detection::Spam(SpamLogEntry::with_evidence(
            AGENT_TIMESTAMP,
            format!("Form submitted too quickly ({elapsed} seconds)"),
            elapsed as f64,
        ));
    }

    if elapsed > config.max_submit_secs {
        return Detection::Spam(SpamLogEntry::with_evidence(
            AGENT_TIMESTAMP,
            format!("Form session expired ({elapsed} seconds old)"),
            elapsed as f64,
        ));
    }

    Detection::Ham
}
