use crate::lexer::TermLexer;

/// Distinct lowercase query terms, kept in first-occurrence order.
///
/// The order matters to callers that apply terms one after another
/// (highlighting), so this is a small vec rather than a hash set. Queries
/// are a handful of words; the linear `contains` check is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Terms {
    terms: Vec<String>,
}

impl Terms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term unless it is empty or already present.
    /// Returns whether the term was added.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term.is_empty() || self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Terms joined by a single space
    pub fn joined(&self) -> String {
        self.terms.join(" ")
    }
}

impl FromIterator<String> for Terms {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut terms = Terms::new();
        for term in iter {
            terms.insert(term);
        }
        terms
    }
}

impl<'a> IntoIterator for &'a Terms {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Normalize a raw query into its terms: lowercase, split on whitespace,
/// drop empties and duplicates. No stemming or synonyms.
pub fn tokenize(raw: &str) -> Terms {
    TermLexer::new(raw)
        .words()
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Morning Adhkar", &["morning", "adhkar"])]
    #[case("  QURAN\tduas ", &["quran", "duas"])]
    #[case("dua dua DUA", &["dua"])]
    #[case("c++ 99", &["c++", "99"])]
    #[case("", &[])]
    #[case("   \n\t ", &[])]
    fn test_tokenize(#[case] input: &str, #[case] expected: &[&str]) {
        let terms = tokenize(input);
        let actual: Vec<&str> = terms.iter().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case("Morning Adhkar")]
    #[case("  hajj   UMRAH  hajj ")]
    #[case("ÉTÉ   Ünïcödé")]
    #[case("")]
    #[case("a.b* (c)")]
    fn test_tokenize_idempotent(#[case] input: &str) {
        let once = tokenize(input);
        let twice = tokenize(&once.joined());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_insert_rejects_empty_and_duplicates() {
        let mut terms = Terms::new();
        assert!(terms.insert("sleep"));
        assert!(!terms.insert("sleep"));
        assert!(!terms.insert(""));
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_first_occurrence_order_kept() {
        let terms = tokenize("night sleep NIGHT protection");
        assert_eq!(terms.as_slice(), ["night", "sleep", "protection"]);
    }
}
