//! # Note Templates
//!
//! A template is plain text with `{{name}}` placeholders. The known names are
//! `title`, `authors`, `year`, `doi` and `id`; anything else inside braces is
//! copied through as-is.
//!
//! Placeholders are replaced one name at a time, in [`PLACEHOLDER_ORDER`],
//! each replacement covering the whole text produced so far. A value that
//! itself contains a later placeholder is therefore expanded too: a title of
//! `{{year}}` ends up as the year. Values are inserted literally otherwise.

use crate::model::PaperMetadata;

pub const UNTITLED: &str = "Untitled Paper";

pub const DEFAULT_TEMPLATE: &str = "---\n\ntitle: {{title}}\nauthors: {{authors}}\nyear: {{year}}\ndoi: {{doi}}\n---\n\n# {{title}}\n\n## Summary\n\n## Notes\n\n";

pub const PLACEHOLDER_ORDER: [&str; 5] = ["title", "authors", "year", "doi", "id"];

pub fn expand(template: &str, id: &str, metadata: &PaperMetadata) -> String {
    PLACEHOLDER_ORDER
        .iter()
        .fold(template.to_string(), |text, name| {
            text.replace(&format!("{{{{{}}}}}", name), value_for(name, id, metadata))
        })
}

fn value_for<'a>(name: &str, id: &'a str, metadata: &'a PaperMetadata) -> &'a str {
    match name {
        "title" => metadata.title().unwrap_or(UNTITLED),
        "authors" => metadata.authors().unwrap_or(""),
        "year" => metadata.year().unwrap_or(""),
        "doi" => metadata.doi().unwrap_or(""),
        _ => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_with_no_metadata() {
        let out = expand(DEFAULT_TEMPLATE, "abc", &PaperMetadata::default());
        assert_eq!(
            out,
            "---\n\ntitle: Untitled Paper\nauthors: \nyear: \ndoi: \n---\n\n# Untitled Paper\n\n## Summary\n\n## Notes\n\n"
        );
        assert!(!out.contains("abc"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let meta = PaperMetadata::default().with_title("T");
        assert_eq!(expand("{{title}} {{title}}", "x", &meta), "T T");
    }

    #[test]
    fn fills_all_known_fields() {
        let meta = PaperMetadata::default()
            .with_title("A Study of X")
            .with_authors("Ada, Bob")
            .with_year("2024")
            .with_doi("10.1/abc");
        let out = expand(
            "{{id}}|{{title}}|{{authors}}|{{year}}|{{doi}}",
            "raw/id",
            &meta,
        );
        assert_eq!(out, "raw/id|A Study of X|Ada, Bob|2024|10.1/abc");
    }

    #[test]
    fn empty_title_renders_untitled() {
        let meta = PaperMetadata::default().with_title("");
        assert_eq!(expand("{{title}}", "x", &meta), UNTITLED);
    }

    #[test]
    fn unknown_placeholders_pass_through() {
        let out = expand("{{date}} {{title}} {{ title }}", "x", &PaperMetadata::default());
        assert_eq!(out, "{{date}} Untitled Paper {{ title }}");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        assert_eq!(
            expand("a {{title", "x", &PaperMetadata::default()),
            "a {{title"
        );
    }

    #[test]
    fn nested_braces_still_expand_inner_token() {
        let meta = PaperMetadata::default().with_year("1999");
        assert_eq!(expand("{{{{year}}", "x", &meta), "{{1999");
    }

    #[test]
    fn values_are_expanded_by_later_placeholders() {
        let meta = PaperMetadata::default()
            .with_title("{{year}}")
            .with_year("2024");
        assert_eq!(expand("{{title}}|{{year}}", "x", &meta), "2024|2024");
    }

    #[test]
    fn values_are_not_expanded_by_earlier_placeholders() {
        // `title` has already been replaced when the authors go in.
        let meta = PaperMetadata::default()
            .with_title("T")
            .with_authors("{{title}}");
        assert_eq!(expand("{{authors}}", "x", &meta), "{{title}}");
    }

    #[test]
    fn id_placeholder_in_values_gets_the_id() {
        let meta = PaperMetadata::default().with_doi("see {{id}}");
        assert_eq!(expand("{{doi}}", "10.1/abc", &meta), "see 10.1/abc");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(expand("plain text", "x", &PaperMetadata::default()), "plain text");
    }
}
