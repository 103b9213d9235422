//! Fuzzy filtering of option labels.
//!
//! A pattern matches a candidate when every pattern character appears in the
//! candidate in the same relative order, not necessarily contiguously.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Deserialize;

/// Subsequence test with ASCII case folding.
///
/// ```
/// use rust_prompt_core::matcher::fuzzy_match;
///
/// assert!(fuzzy_match("CaRtWheel", "cw"));
/// assert!(!fuzzy_match("cartwheel", "dog"));
/// ```
#[must_use]
pub fn fuzzy_match(candidate: &str, pattern: &str) -> bool {
    subsequence(candidate, pattern, |c, p| c.eq_ignore_ascii_case(&p))
}

/// Subsequence test comparing characters exactly.
#[must_use]
pub fn fuzzy_match_case_sensitive(candidate: &str, pattern: &str) -> bool {
    subsequence(candidate, pattern, |c, p| c == p)
}

fn subsequence(candidate: &str, pattern: &str, eq: impl Fn(char, char) -> bool) -> bool {
    let mut pattern = pattern.chars().peekable();
    for c in candidate.chars() {
        match pattern.peek() {
            None => break,
            Some(&p) if eq(c, p) => {
                pattern.next();
            }
            Some(_) => {}
        }
    }
    pattern.peek().is_none()
}

/// Matching policy used when filtering a selection.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Case-folding subsequence match.
    #[default]
    Fuzzy,
    /// Case-sensitive subsequence match.
    ExactCase,
    /// Skim scoring from `fuzzy-matcher`, used as a yes/no test.
    Skim,
}

impl MatchPolicy {
    /// Returns the entries of `items` whose label matches `pattern`, in their
    /// original order.
    pub fn filter<T, F>(self, items: &[T], pattern: &str, label: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> &str,
    {
        if pattern.is_empty() {
            return items.to_vec();
        }

        match self {
            MatchPolicy::Fuzzy => items
                .iter()
                .filter(|item| fuzzy_match(label(*item), pattern))
                .cloned()
                .collect(),
            MatchPolicy::ExactCase => items
                .iter()
                .filter(|item| fuzzy_match_case_sensitive(label(*item), pattern))
                .cloned()
                .collect(),
            MatchPolicy::Skim => {
                let matcher = SkimMatcherV2::default();
                items
                    .iter()
                    .filter(|item| matcher.fuzzy_match(label(*item), pattern).is_some())
                    .cloned()
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match_table() {
        let cases = [
            ("fat cat", "fct", true),
            ("fat cat", "fcct", false),
            ("cartwheel", "twl", true),
            ("cartwheel", "cart", true),
            ("cartwheel", "cw", true),
            ("cartwheel", "ee", true),
            ("cartwheel", "art", true),
            ("cartwheel", "eeel", false),
            ("cartwheel", "dog", false),
            ("café crème", "cc", true),
            ("café crème", "éè", true),
            ("Ã©", "é", false),
            ("Ñandú", "ñ", false),
        ];

        for (candidate, pattern, expected) in cases {
            assert_eq!(
                fuzzy_match(candidate, pattern),
                expected,
                "fuzzy_match({candidate:?}, {pattern:?})"
            );
        }
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert!(fuzzy_match("", ""));
        assert!(fuzzy_match("anything", ""));
        assert!(fuzzy_match_case_sensitive("anything", ""));
    }

    #[test]
    fn test_substring_always_matches() {
        let candidate = "Manchester United";
        for start in 0..candidate.len() {
            for end in start..=candidate.len() {
                assert!(fuzzy_match(candidate, &candidate[start..end]));
            }
        }
    }

    #[test]
    fn test_longer_pattern_never_matches() {
        assert!(!fuzzy_match("abc", "abcd"));
        assert!(!fuzzy_match("", "a"));
        assert!(fuzzy_match("abc", "abc"));
    }

    #[test]
    fn test_case_folding() {
        assert!(fuzzy_match("CaRtWheel", "cw"));
        assert!(fuzzy_match("cartwheel", "CW"));
        assert!(!fuzzy_match_case_sensitive("CaRtWheel", "cw"));
        assert!(fuzzy_match_case_sensitive("CaRtWheel", "CW"));
    }

    #[test]
    fn test_multibyte_characters_match_whole() {
        assert!(!fuzzy_match_case_sensitive("Ã©", "é"));
        assert!(fuzzy_match_case_sensitive("résumé", "éé"));
        let items = vec!["Ã©clair", "éclair"];
        assert_eq!(MatchPolicy::Fuzzy.filter(&items, "é", |s| *s), vec!["éclair"]);
    }

    #[test]
    fn test_folding_does_not_alias_punctuation() {
        // '@' and '`' differ from each other only in the case bit.
        assert!(!fuzzy_match("@", "`"));
        assert!(!fuzzy_match("[", "{"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec!["FC Barcelona", "Spartak Moscow", "Manchester United", "Juventus"];
        let filtered = MatchPolicy::Fuzzy.filter(&items, "c", |s| *s);
        assert_eq!(filtered, vec!["FC Barcelona", "Spartak Moscow", "Manchester United"]);

        let filtered = MatchPolicy::Fuzzy.filter(&items, "us", |s| *s);
        assert_eq!(filtered, vec!["Manchester United", "Juventus"]);
    }

    #[test]
    fn test_filter_results_all_match() {
        let items = vec!["alpha", "beta", "gamma", "delta", "epsilon"];
        for pattern in ["a", "ea", "lt", "xyz", ""] {
            let filtered = MatchPolicy::Fuzzy.filter(&items, pattern, |s| *s);
            assert!(filtered.iter().all(|s| fuzzy_match(s, pattern)));
            let positions: Vec<usize> = filtered
                .iter()
                .map(|f| items.iter().position(|i| i == f).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_skim_policy() {
        let items = vec!["choose", "chore", "apple"];
        let filtered = MatchPolicy::Skim.filter(&items, "cho", |s| *s);
        assert_eq!(filtered, vec!["choose", "chore"]);
        assert_eq!(MatchPolicy::Skim.filter(&items, "", |s| *s).len(), 3);
    }

    #[test]
    fn test_exact_case_policy() {
        let items = vec!["Alpha", "alpha"];
        assert_eq!(MatchPolicy::ExactCase.filter(&items, "A", |s| *s), vec!["Alpha"]);
    }

    #[test]
    fn test_policy_deserialize() {
        let policy: MatchPolicy = serde_yaml::from_str("exact-case").unwrap();
        assert_eq!(policy, MatchPolicy::ExactCase);
        let policy: MatchPolicy = serde_yaml::from_str("skim").unwrap();
        assert_eq!(policy, MatchPolicy::Skim);
    }
}
