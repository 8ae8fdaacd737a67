use chrono::{DateTime, Utc};

use crate::{
    config::FilterConfig,
    detectors::{content, fields, honeypot, timing},
    domain::{Detection, Submission, Verdict},
};

/// Runs the detectors in a fixed order and stops at the first spam hit:
/// honeypot, then timing, then content. The cheap, high-confidence checks go
/// first so the verdict carries the most specific reason available.
pub fn classify(submission: &Submission, config: &FilterConfig, now: DateTime<Utc>) -> Verdict {
    let detection = honeypot::check(submission, &config.honeypot_field)
        .or_else(|| timing::check(submission, now, config))
        .or_else(|| match fields::extract_message(submission, &config.message_fields) {
            Some(message) => content::check(message, config),
            // No message-like field present, so there is nothing to analyze.
            None => Detection::Ham,
        });

    match detection {
        Detection::Spam(entry) => {
            tracing::info!(
                target: "classifier",
                agent = %entry.agent,
                reason = %entry.reason,
                "submission flagged as spam"
            );
            Verdict::from_log(vec![entry])
        }
        Detection::Ham => {
            tracing::debug!(target: "classifier", "submission passed all checks");
            Verdict::ham()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AGENT_CONTENT, AGENT_HONEYPOT, AGENT_TIMESTAMP};

    fn base_submission(now: DateTime<Utc>, message: &str) -> Submission {
        [
            ("your-website".to_string(), String::new()),
            (
                "cf7_timestamp".to_string(),
                (now.timestamp() - 10).to_string(),
            ),
            ("message".to_string(), message.to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn clean_submission_is_ham() {
        let config = FilterConfig::default();
        let now = Utc::now();
        let submission =
            base_submission(now, "Hello, I have a question about pricing. Thanks!");
        let verdict = classify(&submission, &config, now);
        assert!(!verdict.spam);
        assert!(verdict.log.is_empty());
    }

    #[test]
    fn filled_honeypot_wins_over_everything_else() {
        let config = FilterConfig::default();
        let now = Utc::now();
        // Honeypot filled AND timestamp missing AND spammy content: the
        // honeypot agent must be the one reported.
        let submission: Submission = [("your-website", "http://spam.biz"), ("message", "casino")]
            .into_iter()
            .collect();
        let verdict = classify(&submission, &config, now);
        assert!(verdict.spam);
        assert_eq!(verdict.log.len(), 1);
        assert_eq!(verdict.first_entry().unwrap().agent, AGENT_HONEYPOT);
    }

    #[test]
    fn honeypot_only_submission_is_spam() {
        let config = FilterConfig::default();
        let submission: Submission = [("your-website", "http://spam.biz")].into_iter().collect();
        let verdict = classify(&submission, &config, Utc::now());
        assert!(verdict.spam);
        assert_eq!(verdict.first_entry().unwrap().agent, AGENT_HONEYPOT);
    }

    #[test]
    fn timing_fires_before_content() {
        let config = FilterConfig::default();
        let now = Utc::now();
        let submission: Submission = [
            ("your-website".to_string(), String::new()),
            (
                "cf7_timestamp".to_string(),
                (now.timestamp() - 2).to_string(),
            ),
            ("message".to_string(), "buy now at our casino".to_string()),
        ]
        .into_iter()
        .collect();
        let verdict = classify(&submission, &config, now);
        let entry = verdict.first_entry().unwrap();
        assert_eq!(entry.agent, AGENT_TIMESTAMP);
        assert!(entry.reason.contains("too quickly"));
    }

    #[test]
    fn content_check_runs_last() {
        let config = FilterConfig::default();
        let now = Utc::now();
        let submission = base_submission(now, "come play at our casino with free spins");
        let verdict = classify(&submission, &config, now);
        let entry = verdict.first_entry().unwrap();
        assert_eq!(entry.agent, AGENT_CONTENT);
        assert_eq!(entry.reason, "Spam keyword detected: \"casino\"");
    }

    #[test]
    fn missing_message_field_skips_content_analysis() {
        let config = FilterConfig::default();
        let now = Utc::now();
        let submission: Submission = [
            ("your-website".to_string(), String::new()),
            (
                "cf7_timestamp".to_string(),
                (now.timestamp() - 10).to_string(),
            ),
            ("your-name".to_string(), "x".to_string()),
        ]
        .into_iter()
        .collect();
        assert!(!classify(&submission, &config, now).spam);
    }

    #[test]
    fn classification_is_deterministic() {
        let config = FilterConfig::default();
        let now = Utc::now();
        let submission = base_submission(now, "check this out: http://a.biz http://b.biz");
        let first = classify(&submission, &config, now);
        let second = classify(&submission, &config, now);
        assert_eq!(first, second);
    }
}
