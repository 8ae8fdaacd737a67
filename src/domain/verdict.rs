use serde::{Deserialize, Serialize};

pub const AGENT_HONEYPOT: &str = "honeypot";
pub const AGENT_TIMESTAMP: &str = "timestamp";
pub const AGENT_CONTENT: &str = "content-analysis";

/// One audit-trail entry explaining why a detector flagged a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamLogEntry {
    pub agent: String,
    pub reason: String,
    /// Offending count or percentage, when the reason has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<f64>,
}

impl SpamLogEntry {
    pub fn new(agent: &str, reason: impl Into<String>) -> Self {
        Self {
            agent: agent.to_string(),
            reason: reason.into(),
            evidence: None,
        }
    }

    pub fn with_evidence(agent: &str, reason: impl Into<String>, evidence: f64) -> Self {
        Self {
            agent: agent.to_string(),
            reason: reason.into(),
            evidence: Some(evidence),
        }
    }
}

/// Outcome of a single detector run.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Ham,
    Spam(SpamLogEntry),
}

impl Detection {
    pub fn is_spam(&self) -> bool {
        matches!(self, Detection::Spam(_))
    }

    /// Short-circuit chaining: keeps a spam detection, otherwise runs the
    /// next detector.
    pub fn or_else(self, next: impl FnOnce() -> Detection) -> Detection {
        match self {
            Detection::Spam(_) => self,
            Detection::Ham => next(),
        }
    }
}

/// Final pipeline output: the spam flag is derived from the log, so the two
/// can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub spam: bool,
    pub log: Vec<SpamLogEntry>,
}

impl Verdict {
    pub fn ham() -> Self {
        Self {
            spam: false,
            log: Vec::new(),
        }
    }

    pub fn from_log(log: Vec<SpamLogEntry>) -> Self {
        Self {
            spam: !log.is_empty(),
            log,
        }
    }

    pub fn first_entry(&self) -> Option<&SpamLogEntry> {
        self.log.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_flag_tracks_log() {
        assert!(!Verdict::from_log(Vec::new()).spam);

        let verdict = Verdict::from_log(vec![SpamLogEntry::new(
            AGENT_HONEYPOT,
            "Honeypot field was filled",
        )]);
        assert!(verdict.spam);
        assert_eq!(verdict.first_entry().unwrap().agent, AGENT_HONEYPOT);
    }

    #[test]
    fn entry_without_evidence_serializes_compactly() {
        let entry = SpamLogEntry::new(AGENT_HONEYPOT, "Honeypot field was filled");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("evidence"));

        let entry = SpamLogEntry::with_evidence(AGENT_CONTENT, "Too many URLs", 3.0);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"evidence\":3.0"));
    }
}
