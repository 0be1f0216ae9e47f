use regex::Regex;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Artifact tokens that show up in the genres column but are not genres.
pub const NON_GENRE_TOKENS: &[&str] = &["news"];

/// Tokenizes the multi-value `genres` field into a normalized vocabulary.
///
/// Word characters and hyphens are token-internal ("Comedy-Drama" and
/// "Sci-Fi" stay whole), everything else separates. Tokens of length <= 1
/// are dropped, which also kills the lone "n" a literal `\N` null marker
/// leaves behind.
pub struct GenreExtractor {
    token: Regex,
    deny: FxHashSet<String>,
}

impl GenreExtractor {
    pub fn new() -> Self {
        Self::with_denylist(NON_GENRE_TOKENS)
    }

    pub fn with_denylist(deny: &[&str]) -> Self {
        GenreExtractor {
            token: Regex::new(r"[\w-]+").unwrap(),
            deny: deny.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Distinct normalized tokens across every non-null field.
    pub fn extract<'a, I>(&self, fields: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut vocab = BTreeSet::new();
        for field in fields.into_iter().flatten() {
            let lower = field.to_lowercase();
            for m in self.token.find_iter(&lower) {
                let tok = m.as_str();
                if tok.len() > 1 && !self.deny.contains(tok) {
                    vocab.insert(tok.to_string());
                }
            }
        }
        vocab
    }

    /// Whole-word membership of `token` in the field's tokenized form.
    /// A null field matches nothing.
    pub fn matches(&self, field: Option<&str>, token: &str) -> bool {
        let Some(field) = field else {
            return false;
        };
        let lower = field.to_lowercase();
        self.token.find_iter(&lower).any(|m| m.as_str() == token)
    }
}

impl Default for GenreExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_genres {
    use super::*;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_splits_and_lowercases() {
        let ex = GenreExtractor::new();
        let vocab = ex.extract([Some("Action,Comedy")]);
        assert_eq!(vocab, set(&["action", "comedy"]));
    }

    #[test]
    fn test_hyphenated_compound_stays_whole() {
        let ex = GenreExtractor::new();
        let vocab = ex.extract([Some("Action,Comedy-Drama")]);
        assert_eq!(vocab, set(&["action", "comedy-drama"]));
    }

    #[test]
    fn test_null_fields_contribute_nothing() {
        let ex = GenreExtractor::new();
        assert!(ex.extract([None, None]).is_empty());
        assert!(ex.extract(std::iter::empty::<Option<&str>>()).is_empty());
    }

    #[test]
    fn test_short_tokens_dropped() {
        let ex = GenreExtractor::new();
        // \N null markers and stray single characters never reach the vocabulary
        let vocab = ex.extract([Some("\\N"), Some("a,Drama")]);
        assert_eq!(vocab, set(&["drama"]));
        assert!(vocab.iter().all(|t| t.len() > 1));
    }

    #[test]
    fn test_denylist_is_value_based() {
        let ex = GenreExtractor::new();
        let vocab = ex.extract([Some("News,Drama")]);
        assert_eq!(vocab, set(&["drama"]));

        let keep_all = GenreExtractor::with_denylist(&[]);
        let vocab = keep_all.extract([Some("News,Drama")]);
        assert_eq!(vocab, set(&["drama", "news"]));
    }

    #[test]
    fn test_extract_is_pure() {
        let ex = GenreExtractor::new();
        let fields = [Some("Action,Drama"), Some("Drama"), None];
        let first = ex.extract(fields);
        let second = ex.extract(fields);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_whole_word_only() {
        let ex = GenreExtractor::new();
        assert!(ex.matches(Some("War,Drama"), "war"));
        assert!(ex.matches(Some("Comedy-Drama"), "comedy-drama"));
        // substring matching over-matched compounds; tokenized matching must not
        assert!(!ex.matches(Some("Warfare"), "war"));
        assert!(!ex.matches(Some("Comedy-Drama"), "drama"));
        assert!(!ex.matches(None, "drama"));
    }
}
