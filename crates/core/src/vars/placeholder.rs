//! Placeholder token scanning and case modifiers.
//!
//! A placeholder is written `#{name}`, `#{+name}` or `#{-name}`. The literal
//! token (modifier included) is what gets replaced; the bare name is what gets
//! looked up.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\{([-+A-Za-z0-9_]+)\}").expect("valid regex"));

/// Case change applied to a value before it is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseTransform {
    /// `+` prefix
    Upper,
    /// `-` prefix
    Lower,
    #[default]
    None,
}

impl CaseTransform {
    /// Split a raw variable name into its bare name and case transform.
    ///
    /// Only the first character is treated as a modifier, so `++x` yields
    /// `("+x", Upper)`.
    #[must_use]
    pub fn split(raw: &str) -> (&str, CaseTransform) {
        if let Some(rest) = raw.strip_prefix('+') {
            (rest, CaseTransform::Upper)
        } else if let Some(rest) = raw.strip_prefix('-') {
            (rest, CaseTransform::Lower)
        } else {
            (raw, CaseTransform::None)
        }
    }

    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            CaseTransform::Upper => value.to_uppercase(),
            CaseTransform::Lower => value.to_lowercase(),
            CaseTransform::None => value.to_string(),
        }
    }
}

/// A distinct placeholder token found in some text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// Literal text as it appears, e.g. `#{+author}`.
    pub token: String,
    /// Variable name without modifier, e.g. `author`.
    pub name: String,
    pub case: CaseTransform,
}

impl Placeholder {
    /// The text this token is replaced with when its variable has `value`.
    #[must_use]
    pub fn replacement(&self, value: &str) -> String {
        self.case.apply(value)
    }
}

/// Replace placeholder tokens in one pass over `text`.
///
/// `replacements` is keyed by literal token. Tokens without an entry are kept
/// verbatim, and inserted values are never scanned again.
#[must_use]
pub fn substitute_tokens(text: &str, replacements: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| match replacements.get(&caps[0]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Extract the distinct placeholder tokens of `text` in first-occurrence order.
pub fn scan_placeholders(text: &str) -> Vec<Placeholder> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for cap in PLACEHOLDER_RE.captures_iter(text) {
        let token = &cap[0];
        if !seen.insert(token.to_string()) {
            continue;
        }
        let (name, case) = CaseTransform::split(&cap[1]);
        found.push(Placeholder { token: token.to_string(), name: name.to_string(), case });
    }

    found
}

#[must_use]
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(text: &str) -> Vec<String> {
        scan_placeholders(text).into_iter().map(|p| p.token).collect()
    }

    #[test]
    fn test_scan_dedups_in_first_occurrence_order() {
        let text = "#{b} #{a} #{b} #{+a} #{a}";
        assert_eq!(tokens(text), vec!["#{b}", "#{a}", "#{+a}"]);
    }

    #[test]
    fn test_scan_no_placeholders() {
        assert!(scan_placeholders("plain text, {braces} and #hash").is_empty());
        assert!(!has_placeholders("plain text"));
    }

    #[rstest]
    #[case("#{ name}")]
    #[case("#{name }")]
    #[case("#{na me}")]
    #[case("#{name")]
    #[case("#name}")]
    #[case("#{}")]
    #[case("#{näme}")]
    fn test_scan_rejects_malformed(#[case] text: &str) {
        assert!(scan_placeholders(text).is_empty(), "{text} should not match");
    }

    #[test]
    fn test_scan_nested_braces_matches_inner() {
        assert_eq!(tokens("#{#{inner}}"), vec!["#{inner}"]);
    }

    #[test]
    fn test_scan_splits_modifier() {
        let found = scan_placeholders("#{+upper} #{-lower} #{plain}");
        let parts: Vec<(&str, CaseTransform)> =
            found.iter().map(|p| (p.name.as_str(), p.case)).collect();
        assert_eq!(
            parts,
            vec![
                ("upper", CaseTransform::Upper),
                ("lower", CaseTransform::Lower),
                ("plain", CaseTransform::None),
            ]
        );
    }

    #[rstest]
    #[case("+name", "name", CaseTransform::Upper)]
    #[case("-name", "name", CaseTransform::Lower)]
    #[case("name", "name", CaseTransform::None)]
    #[case("++name", "+name", CaseTransform::Upper)]
    #[case("na-me", "na-me", CaseTransform::None)]
    fn test_split(#[case] raw: &str, #[case] name: &str, #[case] case: CaseTransform) {
        assert_eq!(CaseTransform::split(raw), (name, case));
    }

    #[rstest]
    #[case("Hello World")]
    #[case("ALREADY UPPER")]
    #[case("straße")]
    #[case("")]
    fn test_apply_is_idempotent(#[case] value: &str) {
        for case in [CaseTransform::Upper, CaseTransform::Lower, CaseTransform::None] {
            let once = case.apply(value);
            assert_eq!(case.apply(&once), once);
        }
        assert_eq!(CaseTransform::None.apply(value), value);
    }

    fn replacements(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let p = scan_placeholders("#{-name}").remove(0);
        let value = p.replacement("MyMod");
        let map = replacements(&[(p.token.as_str(), value.as_str())]);
        assert_eq!(substitute_tokens("#{-name}/#{-name}.rs", &map), "mymod/mymod.rs");
    }

    #[test]
    fn test_substitute_value_with_dollar_is_literal() {
        let map = replacements(&[("#{price}", "$1.00 $0")]);
        assert_eq!(substitute_tokens("cost: #{price}", &map), "cost: $1.00 $0");
    }

    #[test]
    fn test_substitute_keeps_unknown_tokens() {
        let map = replacements(&[("#{a}", "A")]);
        assert_eq!(substitute_tokens("#{a} #{b} #{+a}", &map), "A #{b} #{+a}");
    }

    #[test]
    fn test_substitute_does_not_rescan_inserted_values() {
        let map = replacements(&[("#{a}", "#{b}"), ("#{b}", "B")]);
        assert_eq!(substitute_tokens("#{a} #{b}", &map), "#{b} B");
    }
}
