pub mod submission;
pub mod verdict;

pub use submission::Submission;
pub use verdict::{Detection, SpamLogEntry, Verdict, AGENT_CONTENT, AGENT_HONEYPOT, AGENT_TIMESTAMP};
