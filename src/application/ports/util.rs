// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, collapse non-alphanumeric runs to `-`, strip edge dashes.
    fn slugify(&self, input: &str) -> String;
}
