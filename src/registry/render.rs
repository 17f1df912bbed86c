//! Output rendering.
//!
//! Two shapes of output:
//! - list mode: every identifier lower-cased, each preceded by `\n`
//! - template mode: one banner block per template, concatenated in order

use crate::registry::listing::TemplateListing;

/// Render the listing for list mode.
pub fn render_listing(listing: &TemplateListing) -> String {
    listing
        .iter()
        .map(|path| format!("\n{}", path.to_lowercase()))
        .collect()
}

/// Render one fetched template wrapped in start/end banners.
///
/// `name` is the resolved listing path, not the token the user typed.
pub fn render_block(name: &str, content: &str) -> String {
    format!(
        "\n\n# --- start {name} --- \n\n{content}\n\n# --- end {name} ---",
        name = name,
        content = content
    )
}

/// Concatenate the blocks of several `(name, content)` pairs in order.
pub fn render_templates<'a, I>(templates: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    templates
        .into_iter()
        .map(|(name, content)| render_block(name, content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_has_exact_spacing() {
        assert_eq!(
            render_block("Go", "*.exe\ndist/\n"),
            "\n\n# --- start Go --- \n\n*.exe\ndist/\n\n\n# --- end Go ---"
        );
    }

    #[test]
    fn block_with_empty_content() {
        assert_eq!(
            render_block("Rust", ""),
            "\n\n# --- start Rust --- \n\n\n\n# --- end Rust ---"
        );
    }

    #[test]
    fn templates_are_concatenated_without_separator() {
        let out = render_templates([("Go", "a"), ("Rust", "b")]);
        assert_eq!(
            out,
            "\n\n# --- start Go --- \n\na\n\n# --- end Go ---\n\n# --- start Rust --- \n\nb\n\n# --- end Rust ---"
        );
    }

    #[test]
    fn listing_is_lowercased_in_order() {
        let listing = TemplateListing::new(vec![
            "Go".to_string(),
            "community/Golang/Hugo".to_string(),
            "Actionscript".to_string(),
        ]);
        assert_eq!(
            render_listing(&listing),
            "\ngo\ncommunity/golang/hugo\nactionscript"
        );
    }

    #[test]
    fn listing_keeps_case_variants() {
        let listing = TemplateListing::new(vec!["Go".to_string(), "go".to_string()]);
        assert_eq!(render_listing(&listing), "\ngo\ngo");
    }

    #[test]
    fn empty_listing_renders_empty() {
        assert_eq!(render_listing(&TemplateListing::default()), "");
    }
}
