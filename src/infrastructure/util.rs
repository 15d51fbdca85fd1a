use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_collapses_to_single_dashes() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello, World!"), "hello-world");
        assert_eq!(slugger.slugify("  --Rust   & Tokio--  "), "rust-tokio");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn output_is_url_safe() {
        let slug = DefaultSlugGenerator.slugify("Ça va? 100% «ok»");
        assert!(slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }
}
