use crate::domain::{Detection, SpamLogEntry, Submission, AGENT_HONEYPOT};

/// A field hidden from human visitors was filled in. Humans can't see it, so
/// any non-whitespace value marks an automated submitter.
pub fn check(submission: &Submission, honeypot_field: &str) -> Detection {
    match submission.get(honeypot_field) {
        Some(value) if !value.trim().is_empty() => Detection::Spam(SpamLogEntry::new(
            AGENT_HONEYPOT,
            "Honeypot field was filled",
        )),
        _ => Detection::Ham,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "your-website";

    #[test]
    fn filled_honeypot_is_spam() {
        let submission: Submission = [(FIELD, "http://spam.biz")].into_iter().collect();
        let detection = check(&submission, FIELD);
        match detection {
            Detection::Spam(entry) => {
                assert_eq!(entry.agent, AGENT_HONEYPOT);
                assert_eq!(entry.reason, "Honeypot field was filled");
            }
            Detection::Ham => panic!("expected spam"),
        }
    }

    #[test]
    fn empty_or_whitespace_honeypot_is_ham() {
        let submission: Submission = [(FIELD, "")].into_iter().collect();
        assert!(!check(&submission, FIELD).is_spam());

        let submission: Submission = [(FIELD, "   ")].into_iter().collect();
        assert!(!check(&submission, FIELD).is_spam());
    }

    #[test]
    fn missing_honeypot_is_ham() {
        let submission: Submission = [("message", "hello there friend")].into_iter().collect();
        assert!(!check(&submission, FIELD).is_spam());
    }
}
