use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::application::dto::SeoMetadataDto;
use crate::domain::post::{SEO_DESCRIPTION_MAX_CHARS, SEO_TITLE_MAX_CHARS, value_objects::truncate_chars};

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("static regex compiles"));

/// Title/description pair as recovered from model output, before sanitizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSeo {
    #[serde(rename = "seo_title")]
    pub title: Option<String>,
    #[serde(rename = "seo_description")]
    pub description: Option<String>,
}

/// Which stage of the pipeline produced the metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeoParse {
    Structured(RawSeo),
    Heuristic(RawSeo),
    Fallback(RawSeo),
}

impl SeoParse {
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::Heuristic(_) => "heuristic",
            Self::Fallback(_) => "fallback",
        }
    }

    pub const fn raw(&self) -> &RawSeo {
        match self {
            Self::Structured(raw) | Self::Heuristic(raw) | Self::Fallback(raw) => raw,
        }
    }

    /// Trim, cap to 60/160 characters and fall back to `original_title`
    /// when no title was recovered.
    pub fn finalize(self, original_title: &str) -> SeoMetadataDto {
        let raw = match self {
            Self::Structured(raw) | Self::Heuristic(raw) | Self::Fallback(raw) => raw,
        };
        let title = raw
            .title
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(original_title)
            .trim();
        let description = raw.description.as_deref().map_or("", str::trim);
        SeoMetadataDto {
            seo_title: truncate_chars(title, SEO_TITLE_MAX_CHARS),
            seo_description: truncate_chars(description, SEO_DESCRIPTION_MAX_CHARS),
        }
    }
}

/// Run the three-stage pipeline over raw completion text. Never fails.
/// Output without a JSON object stays heuristic even when nothing is
/// labelled. Only a JSON match that fails to decode takes the first-line
/// fallback.
pub fn parse_seo(output: &str) -> SeoParse {
    match JSON_OBJECT.find(output) {
        Some(found) => match serde_json::from_str::<RawSeo>(found.as_str()) {
            Ok(raw) => SeoParse::Structured(raw),
            Err(_) => SeoParse::Fallback(first_line_split(output)),
        },
        None => SeoParse::Heuristic(RawSeo {
            title: labelled_line(output, "title"),
            description: labelled_line(output, "description"),
        }),
    }
}

fn labelled_line(output: &str, label: &str) -> Option<String> {
    let line = output
        .lines()
        .find(|line| line.to_lowercase().contains(label))?;
    let (_, value) = line.split_once(':')?;
    let value = value
        .trim()
        .trim_end_matches(',')
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn first_line_split(output: &str) -> RawSeo {
    let mut lines = output.lines().map(str::trim).filter(|line| !line.is_empty());
    let title = lines.next().map(str::to_owned);
    let rest = lines.collect::<Vec<_>>().join(" ");
    RawSeo {
        title,
        description: (!rest.is_empty()).then_some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_wrapped_in_prose_is_structured() {
        let output = "Sure! Here you go:\n{\n  \"seo_title\": \"What Is Rust?\",\n  \"seo_description\": \"A systems language.\"\n}\nEnjoy.";
        let parsed = parse_seo(output);
        assert!(matches!(parsed, SeoParse::Structured(_)));
        let seo = parsed.finalize("Rust");
        assert_eq!(seo.seo_title, "What Is Rust?");
        assert_eq!(seo.seo_description, "A systems language.");
    }

    #[test]
    fn labelled_lines_are_heuristic() {
        let output = "SEO Title: \"What Is Ownership?\"\nMeta description: Explains moves, borrows and lifetimes.";
        let parsed = parse_seo(output);
        assert!(matches!(parsed, SeoParse::Heuristic(_)));
        let seo = parsed.finalize("Ownership");
        assert_eq!(seo.seo_title, "What Is Ownership?");
        assert_eq!(seo.seo_description, "Explains moves, borrows and lifetimes.");
    }

    #[test]
    fn value_keeps_text_after_first_colon_only() {
        let parsed = parse_seo("Title: Time: A Primer");
        assert_eq!(parsed.raw().title.as_deref(), Some("Time: A Primer"));
    }

    #[test]
    fn unlabelled_text_keeps_original_title() {
        let output = "\nWhat Is Tokio\nAn async runtime\nfor Rust.";
        let parsed = parse_seo(output);
        assert!(matches!(parsed, SeoParse::Heuristic(_)));
        let seo = parsed.finalize("Tokio");
        assert_eq!(seo.seo_title, "Tokio");
        assert_eq!(seo.seo_description, "");
    }

    #[test]
    fn labelled_line_without_colon_keeps_original_title() {
        let parsed = parse_seo("A better title for this post\nDescription: Short summary.");
        assert!(matches!(parsed, SeoParse::Heuristic(_)));
        let seo = parsed.finalize("Original");
        assert_eq!(seo.seo_title, "Original");
        assert_eq!(seo.seo_description, "Short summary.");
    }

    #[test]
    fn broken_json_falls_back() {
        let parsed = parse_seo("{ seo_title: oops }");
        assert!(matches!(parsed, SeoParse::Fallback(_)));
        assert_eq!(parsed.finalize("Post").seo_title, "{ seo_title: oops }");
    }

    #[test]
    fn empty_output_uses_original_title() {
        let seo = parse_seo("").finalize("My Post");
        assert_eq!(seo.seo_title, "My Post");
        assert_eq!(seo.seo_description, "");
    }

    #[test]
    fn results_are_capped() {
        let output = format!(
            "{{\"seo_title\": \"{}\", \"seo_description\": \"{}\"}}",
            "т".repeat(90),
            "d".repeat(400)
        );
        let seo = parse_seo(&output).finalize("x");
        assert_eq!(seo.seo_title.chars().count(), SEO_TITLE_MAX_CHARS);
        assert_eq!(seo.seo_description.chars().count(), SEO_DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn structured_without_title_uses_original_title() {
        let seo = parse_seo("{\"seo_description\": \"Only a description\"}").finalize("Original");
        assert_eq!(seo.seo_title, "Original");
        assert_eq!(seo.seo_description, "Only a description");
    }
}
