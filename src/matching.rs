//! Approximate name matching for duplicate detection.
//!
//! When a new item is added, its name is scored against every existing name
//! and the single best match at or above [`SIMILARITY_THRESHOLD`] is offered
//! to the caller for confirmation. This catches near-duplicate inventory
//! lines created by typos.

/// Minimum similarity score (0-100) for two names to count as a likely match.
/// Fixed policy constant, not configurable.
pub const SIMILARITY_THRESHOLD: u32 = 85;

/// The closest existing name to a candidate, with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarName {
    pub name: String,
    pub score: u32,
}

/// Scores two names on a 0-100 scale using normalized Levenshtein similarity.
/// Both sides are trimmed and lowercased first, so casing and stray
/// whitespace never count as differences.
pub fn similarity_score(a: &str, b: &str) -> u32 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    (strsim::normalized_levenshtein(&a, &b) * 100.0).round() as u32
}

/// Returns the best-scoring existing name for `candidate`, if any reaches the
/// threshold. Ties keep the earliest name in iteration order.
pub fn find_similar_name<'a, I>(candidate: &str, names: I) -> Option<SimilarName>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<SimilarName> = None;

    for name in names {
        let score = similarity_score(candidate, name);
        if score < SIMILARITY_THRESHOLD {
            continue;
        }
        let beats_best = best.as_ref().map(|b| score > b.score).unwrap_or(true);
        if beats_best {
            best = Some(SimilarName {
                name: name.to_string(),
                score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_names_score_100() {
        assert_eq!(similarity_score("Red Shirt", "Red Shirt"), 100);
        assert_eq!(similarity_score("red shirt", "RED SHIRT"), 100);
        assert_eq!(similarity_score(" Red Shirt ", "Red Shirt"), 100);
    }

    #[test]
    fn test_single_typo_scores_above_threshold() {
        // One substitution in a 9-character name: 8/9 ~ 89
        let score = similarity_score("Red Shirt", "Red Shart");
        assert!(score >= SIMILARITY_THRESHOLD, "score was {}", score);
    }

    #[test]
    fn test_unrelated_names_score_below_threshold() {
        let score = similarity_score("Red Shirt", "Blue Jeans");
        assert!(score < SIMILARITY_THRESHOLD, "score was {}", score);
    }

    #[test]
    fn test_find_similar_name_picks_best_match() {
        let names = ["Blue Jeans", "Red Shart", "Red Shirt"];
        let best = find_similar_name("Red Shirt", names.iter().copied()).unwrap();
        assert_eq!(best.name, "Red Shirt");
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_find_similar_name_none_below_threshold() {
        let names = ["Blue Jeans", "Green Hat"];
        assert_eq!(find_similar_name("Red Shirt", names.iter().copied()), None);
    }

    #[test]
    fn test_find_similar_name_empty_inventory() {
        assert_eq!(find_similar_name("Red Shirt", std::iter::empty()), None);
    }
}
