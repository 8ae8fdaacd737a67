use crate::domain::Submission;

/// First candidate field, in priority order, that is present and non-empty.
pub fn extract_message<'a>(submission: &'a Submission, candidates: &[String]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|field| submission.get_non_empty(field))
}
