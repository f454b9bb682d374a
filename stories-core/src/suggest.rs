/// Upper bound on how many suggestions the dropdown shows.
pub const MAX_SUGGESTIONS: usize = 5;

/// Queries this short (in characters) produce no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Case-insensitive substring filter over a fixed list of `"City, Country"` strings.
#[derive(Debug, Clone, Default)]
pub struct SuggestionFilter {
    candidates: Vec<String>,
}

impl SuggestionFilter {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Candidates containing `query`, in original order, at most [`MAX_SUGGESTIONS`].
    pub fn filter(&self, query: &str) -> Vec<String> {
        filter_suggestions(query, &self.candidates)
    }
}

pub fn filter_suggestions<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<String> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect();

    tracing::debug!(query, matches = matches.len(), "filtered suggestions");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn reference() -> SuggestionFilter {
        SuggestionFilter::new(catalog::SUGGESTIONS.iter().copied())
    }

    #[test]
    fn short_queries_yield_nothing() {
        let filter = reference();
        assert!(filter.filter("").is_empty());
        assert!(filter.filter("a").is_empty());
        assert!(filter.filter("é").is_empty());
    }

    #[test]
    fn to_matches_tokyo_and_stays_bounded() {
        let result = reference().filter("to");
        assert!(result.contains(&"Tokyo, Japan".to_string()));
        assert!(result.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(reference().filter("zz").is_empty());
    }

    #[test]
    fn match_is_substring_not_prefix() {
        assert_eq!(reference().filter("York"), vec!["New York, USA".to_string()]);
    }

    #[test]
    fn match_ignores_case() {
        assert_eq!(reference().filter("pArIs"), vec!["Paris, France".to_string()]);
    }

    #[test]
    fn preserves_order_and_truncates() {
        let candidates = [
            "Aa 1", "Bb", "Aa 2", "Aa 3", "Aa 4", "Aa 5", "Aa 6", "Aa 7",
        ];
        let result = filter_suggestions("aa", &candidates);
        assert_eq!(result, vec!["Aa 1", "Aa 2", "Aa 3", "Aa 4", "Aa 5"]);
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let filter = SuggestionFilter::default();
        assert!(filter.filter("Tokyo").is_empty());
    }

    #[test]
    fn an_matches_in_reference_order() {
        // "an" hits France, Japan, Spain and Janeiro.
        let result = reference().filter("an");
        let positions: Vec<usize> = result
            .iter()
            .map(|r| {
                catalog::SUGGESTIONS
                    .iter()
                    .position(|c| *c == r.as_str())
                    .expect("result must come from candidates")
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
