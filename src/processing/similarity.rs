//! TF-IDF cosine similarity between a resume and a single posting.
//!
//! Vocabulary and IDF weights are rebuilt from the two documents on every
//! call, so a score only says how close these two texts are to each other.
//! Scores from different pairs are not on a common scale.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Words of two or more characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Number of documents in every comparison corpus.
const CORPUS_SIZE: f64 = 2.0;

fn term_counts(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN_PATTERN.find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Smoothed inverse document frequency for a term seen in `df` documents.
fn idf(df: usize) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0
}

fn weighted<'a>(
    counts: &'a HashMap<String, usize>,
    other: &HashMap<String, usize>,
) -> HashMap<&'a str, f64> {
    counts
        .iter()
        .map(|(term, &count)| {
            let df = 1 + usize::from(other.contains_key(term));
            (term.as_str(), count as f64 * idf(df))
        })
        .collect()
}

fn norm(vector: &HashMap<&str, f64>) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity of the TF-IDF vectors of `resume` and `posting`,
/// as a percentage in `[0, 100]`.
///
/// Returns `0.0` when either text contains no tokens.
pub fn similarity_score(resume: &str, posting: &str) -> f64 {
    let resume_counts = term_counts(resume);
    let posting_counts = term_counts(posting);
    if resume_counts.is_empty() || posting_counts.is_empty() {
        return 0.0;
    }

    let resume_vector = weighted(&resume_counts, &posting_counts);
    let posting_vector = weighted(&posting_counts, &resume_counts);

    let dot: f64 = resume_vector
        .iter()
        .filter_map(|(term, weight)| posting_vector.get(term).map(|other| weight * other))
        .sum();

    (100.0 * dot / (norm(&resume_vector) * norm(&posting_vector))).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::similarity_score;

    const RESUME: &str = "Senior DevOps Engineer with Kubernetes experience";

    #[test]
    fn identical_texts_score_one_hundred() {
        let score = similarity_score(RESUME, RESUME);
        assert!((score - 100.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn case_does_not_matter() {
        let score = similarity_score(RESUME, &RESUME.to_lowercase());
        assert!((score - 100.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn disjoint_texts_score_zero() {
        assert_eq!(similarity_score("rust tokio", "marketing manager"), 0.0);
    }

    #[test]
    fn score_is_symmetric() {
        let posting = "we are hiring a devops engineer for kubernetes and cloud infra";
        let forward = similarity_score(RESUME, posting);
        let backward = similarity_score(posting, RESUME);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(similarity_score("", RESUME), 0.0);
        assert_eq!(similarity_score(RESUME, "   "), 0.0);
        // Single-character words are not tokens.
        assert_eq!(similarity_score("a b c", RESUME), 0.0);
    }

    #[test]
    fn shared_terms_are_weighted_below_unique_terms() {
        // 3 shared terms (idf 1), 3 and 7 unique ones (idf 1 + ln 1.5).
        let posting = "we are hiring a devops engineer for kubernetes and cloud infra";
        let score = similarity_score(RESUME, posting);
        assert!((score - 24.48).abs() < 0.05, "score was {score}");
    }

    #[test]
    fn near_duplicate_posting_scores_high() {
        let posting = "senior devops engineer with kubernetes experience wanted";
        let score = similarity_score(RESUME, posting);
        assert!((score - 86.74).abs() < 0.05, "score was {score}");
    }

    #[test]
    fn repeated_terms_raise_term_frequency() {
        let once = similarity_score("devops rust", "devops python");
        let twice = similarity_score("devops devops rust", "devops python");
        assert!(twice > once);
    }
}
