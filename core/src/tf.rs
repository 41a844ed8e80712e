use std::collections::HashMap;

/// Term -> occurrence count within a single text.
pub type TermFrequency = HashMap<String, u32>;

/// Count term occurrences by splitting on single space characters.
///
/// Only `' '` separates terms: tabs and newlines stay inside a term, and
/// consecutive or boundary spaces produce empty-string terms that are
/// counted like any other. An empty input yields one empty-string term.
/// No case folding happens here; callers lower-case before indexing and
/// before querying.
pub fn term_frequency(text: &str) -> TermFrequency {
    let mut tf = HashMap::new();
    for term in text.split(' ') {
        *tf.entry(term.to_string()).or_insert(0) += 1;
    }
    tf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let tf = term_frequency("a a b");
        assert_eq!(tf.get("a"), Some(&2));
        assert_eq!(tf.get("b"), Some(&1));
        assert_eq!(tf.len(), 2);
    }

    #[test]
    fn empty_input_yields_one_empty_term() {
        let tf = term_frequency("");
        assert_eq!(tf.get(""), Some(&1));
        assert_eq!(tf.len(), 1);
    }

    #[test]
    fn boundary_spaces_produce_empty_terms() {
        // " a  b " splits into ["", "a", "", "b", ""]
        let tf = term_frequency(" a  b ");
        assert_eq!(tf.get(""), Some(&3));
        assert_eq!(tf.get("a"), Some(&1));
        assert_eq!(tf.get("b"), Some(&1));
    }

    #[test]
    fn tabs_and_newlines_are_not_separators() {
        let tf = term_frequency("a\tb c\nd");
        assert_eq!(tf.get("a\tb"), Some(&1));
        assert_eq!(tf.get("c\nd"), Some(&1));
        assert_eq!(tf.len(), 2);
    }

    #[test]
    fn is_case_sensitive() {
        let tf = term_frequency("Cat cat");
        assert_eq!(tf.get("Cat"), Some(&1));
        assert_eq!(tf.get("cat"), Some(&1));
    }
}
