use crate::domain::posting::MatchResult;

/// Matches to report in a single notification. Never empty.
#[derive(Debug)]
pub struct NotificationPayload {
    matches: Vec<MatchResult>,
}

impl NotificationPayload {
    /// Wraps the matches, returning `None` when there is nothing to send.
    pub fn new(matches: Vec<MatchResult>) -> Option<Self> {
        if matches.is_empty() {
            None
        } else {
            Some(Self { matches })
        }
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// Plain-text message body: one `<url> - <score>%` line per match,
    /// separated by blank lines.
    pub fn body(&self) -> String {
        self.matches
            .iter()
            .map(|m| format!("{} - {:.2}%", m.url, m.score))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
