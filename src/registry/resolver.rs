//! Template name resolution.
//!
//! Resolution order (first match wins, comparisons ignore case):
//! 1. Exact path match (`go` -> `Go`)
//! 2. Path ending in `/` + name (`hugo` -> `community/Golang/Hugo`)
//!
//! Root-level entries have no `/` and can only be matched exactly.
//!
//! Case folding is per character and simple: a character folds to its
//! lowercase form only when that form is a single character.

use crate::error::{GetignoreError, Result};
use crate::registry::listing::TemplateListing;

/// Resolve a single name against the listing.
///
/// Returns the listing's own spelling of the matched path.
pub fn resolve(listing: &TemplateListing, name: &str) -> Result<String> {
    if let Some(path) = listing.iter().find(|path| eq_fold(path, name)) {
        tracing::debug!("resolved {:?} to {:?} (exact)", name, path);
        return Ok(path.to_string());
    }

    let suffix = format!("/{}", name);
    if let Some(path) = listing.iter().find(|path| ends_with_fold(path, &suffix)) {
        tracing::debug!("resolved {:?} to {:?} (suffix)", name, path);
        return Ok(path.to_string());
    }

    Err(GetignoreError::TemplateNotFound {
        name: name.to_string(),
    })
}

fn simple_fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars().map(simple_fold).eq(b.chars().map(simple_fold))
}

fn ends_with_fold(path: &str, suffix: &str) -> bool {
    let mut tail = path.chars().rev().map(simple_fold);
    suffix
        .chars()
        .rev()
        .map(simple_fold)
        .all(|c| tail.next() == Some(c))
}

/// Resolve every name in order, stopping at the first one that fails.
pub fn resolve_all(listing: &TemplateListing, names: &[String]) -> Result<Vec<String>> {
    names.iter().map(|name| resolve(listing, name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(paths: &[&str]) -> TemplateListing {
        TemplateListing::new(names(paths))
    }

    fn names(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn exact_match_ignores_case() {
        let l = listing(&["Go", "community/Golang/Hugo"]);
        assert_eq!(resolve(&l, "go").unwrap(), "Go");
        assert_eq!(resolve(&l, "GO").unwrap(), "Go");
        assert_eq!(resolve(&l, "Go").unwrap(), "Go");
    }

    #[test]
    fn exact_match_on_nested_path() {
        let l = listing(&["Go", "community/Golang/Hugo"]);
        assert_eq!(
            resolve(&l, "COMMUNITY/golang/hugo").unwrap(),
            "community/Golang/Hugo"
        );
    }

    #[test]
    fn exact_match_preferred_over_suffix() {
        let l = listing(&["Global/Rust", "Rust"]);
        assert_eq!(resolve(&l, "rust").unwrap(), "Rust");
    }

    #[test]
    fn suffix_fallback_matches_nested_path() {
        let l = listing(&["Go", "community/Golang/Hugo"]);
        assert_eq!(resolve(&l, "hugo").unwrap(), "community/Golang/Hugo");
    }

    #[test]
    fn suffix_fallback_takes_first_in_listing_order() {
        let l = listing(&["community/A/Hugo", "community/B/Hugo"]);
        assert_eq!(resolve(&l, "HUGO").unwrap(), "community/A/Hugo");
    }

    #[test]
    fn suffix_requires_path_separator() {
        let l = listing(&["Golang", "community/Gohugo"]);
        assert!(matches!(
            resolve(&l, "hugo"),
            Err(GetignoreError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn root_entry_not_matched_by_suffix_rule() {
        // "lang" is a substring suffix of the root entry "Golang" but there is no "/" before it.
        let l = listing(&["Golang"]);
        let err = resolve(&l, "lang").unwrap_err();
        assert_eq!(err.to_string(), "template \"lang\" not found");
    }

    #[test]
    fn multi_segment_suffix() {
        let l = listing(&["community/Golang/Hugo"]);
        assert_eq!(resolve(&l, "golang/hugo").unwrap(), "community/Golang/Hugo");
    }

    #[test]
    fn not_found_names_token() {
        let l = listing(&["Go"]);
        match resolve(&l, "nonexistentlang") {
            Err(GetignoreError::TemplateNotFound { name }) => assert_eq!(name, "nonexistentlang"),
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn resolve_all_preserves_request_order() {
        let l = listing(&["Go", "Rust", "community/Golang/Hugo"]);
        let resolved = resolve_all(&l, &names(&["hugo", "rust", "go"])).unwrap();
        assert_eq!(resolved, ["community/Golang/Hugo", "Rust", "Go"]);
    }

    #[test]
    fn resolve_all_allows_duplicates() {
        let l = listing(&["Go"]);
        let resolved = resolve_all(&l, &names(&["go", "GO"])).unwrap();
        assert_eq!(resolved, ["Go", "Go"]);
    }

    #[test]
    fn resolve_all_fails_on_first_unknown() {
        let l = listing(&["Go", "Rust"]);
        let err = resolve_all(&l, &names(&["go", "cobol", "nope"])).unwrap_err();
        assert_eq!(err.to_string(), "template \"cobol\" not found");
    }

    #[test]
    fn non_ascii_letters_fold() {
        let l = listing(&["Global/Ümlaut"]);
        assert_eq!(resolve(&l, "ümlaut").unwrap(), "Global/Ümlaut");
        assert_eq!(resolve(&l, "global/ÜMLAUT").unwrap(), "Global/Ümlaut");
    }

    #[test]
    fn kelvin_sign_folds_to_k() {
        let l = listing(&["Kotlin"]);
        assert_eq!(resolve(&l, "\u{212A}otlin").unwrap(), "Kotlin");
    }

    #[test]
    fn dotted_capital_i_does_not_fold_to_i() {
        // U+0130 lowercases to two characters, so it only matches itself.
        let l = listing(&["community/Idris"]);
        assert!(resolve(&l, "\u{130}dris").is_err());
        assert_eq!(resolve(&l, "idris").unwrap(), "community/Idris");
    }

    #[test]
    fn suffix_longer_than_path_does_not_match() {
        let l = listing(&["a/Go"]);
        assert!(resolve(&l, "xa/go").is_err());
    }

    #[test]
    fn empty_listing_resolves_nothing() {
        let l = TemplateListing::default();
        assert!(resolve(&l, "go").is_err());
    }
}
