use crate::domain::posting::{MatchResult, PostingCandidate};
use crate::processing::similarity::similarity_score;

/// Scores every posting against the resume, keeping the posting order.
pub fn score_postings(resume: &str, postings: &[PostingCandidate]) -> Vec<MatchResult> {
    postings
        .iter()
        .map(|posting| {
            let score = similarity_score(resume, &posting.text);
            log::info!("Scored {}: {score:.2}%", posting.url);
            MatchResult {
                url: posting.url.clone(),
                score,
            }
        })
        .collect()
}

/// Keeps the results whose score reaches `threshold`, in their original order.
pub fn filter_matches(results: Vec<MatchResult>, threshold: f64) -> Vec<MatchResult> {
    results
        .into_iter()
        .filter(|result| result.score >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_matches, score_postings};
    use crate::domain::posting::{MatchResult, PostingCandidate};

    fn result(url: &str, score: f64) -> MatchResult {
        MatchResult {
            url: url.to_string(),
            score,
        }
    }

    #[test]
    fn filter_keeps_scores_at_or_above_threshold_in_order() {
        let results = vec![
            result("a", 70.0),
            result("b", 64.99),
            result("c", 65.0),
            result("d", 100.0),
            result("e", 0.0),
        ];

        let kept = filter_matches(results, 65.0);

        assert_eq!(kept, vec![result("a", 70.0), result("c", 65.0), result("d", 100.0)]);
    }

    #[test]
    fn filter_on_empty_input_is_empty() {
        assert!(filter_matches(vec![], 65.0).is_empty());
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let results = vec![result("a", 0.0), result("b", 12.5)];
        assert_eq!(filter_matches(results.clone(), 0.0), results);
    }

    #[test]
    fn scoring_produces_one_result_per_posting() {
        let postings = vec![
            PostingCandidate {
                url: "https://a.example".to_string(),
                text: "devops engineer".to_string(),
            },
            PostingCandidate {
                url: "https://b.example".to_string(),
                text: "marketing manager".to_string(),
            },
        ];

        let results = score_postings("DevOps Engineer", &postings);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://a.example");
        assert!((results[0].score - 100.0).abs() < 1e-9);
        assert_eq!(results[1].score, 0.0);
    }
}
