/// A scraped page that mentioned at least one role keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct PostingCandidate {
    pub url: String,
    /// Visible page text, lowercased.
    pub text: String,
}

/// Similarity of one posting to the resume, as a percentage in `[0, 100]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub url: String,
    pub score: f64,
}
