use crate::application::ports::completion::CompletionRequest;
use crate::domain::post::{Locale, value_objects::truncate_chars};

const EXCERPT_SYSTEM: &str = "You are a helpful assistant that creates concise, engaging excerpts for blog posts. Generate a 2-3 sentence excerpt that summarizes the main points and entices readers. Output plain text only, no markdown.";

const SEO_TITLE_SYSTEM: &str = "You are an SEO expert. Generate an optimized title (50-60 characters) that is SEO-friendly, includes relevant keywords, and is compelling for search engines and readers.";

const SEO_RULES: &str = "TASK:\nGenerate an SEO title and meta description for a blog post.\n\nRULES FOR SEO TITLE:\n- Start with the main search query.\n- Use the format: \"What Is X?\" or \"What Is X and Y\".\n- Maximum length: 60 characters.\n- Clear, literal, search-focused wording.\n- NO marketing language.\n- Do NOT use words like: Discover, Ultimate, Guide, Overview, Understanding.\n- Capitalize important words.\n\nRULES FOR META DESCRIPTION:\n- Maximum length: 160 characters.\n- Clearly summarize what the article explains.\n- Use factual, neutral language.\n- Do NOT hype or promote.\n- Mention key concepts found in the content.\n- Do NOT invent information not present in the text.\n\nOUTPUT FORMAT (strict JSON):\n{\n  \"seo_title\": \"...\",\n  \"seo_description\": \"...\"\n}";

const REWRITE_SYSTEM: &str = "You are a professional content editor. Rewrite the provided content according to the user's instructions while maintaining the original meaning and style.";

const POLISH_SYSTEM: &str = "You are a professional content editor. Rewrite the provided blog post content to make it clearer and more professional while maintaining the exact same meaning. Preserve the original structure including headings, paragraphs, and formatting. Do not add any markdown that was not in the original. Output in English.";

const FULL_POST_SYSTEM: &str = "You are a professional blog post writer. Generate a full blog post based on the given title. The post should have a clear structure with an introduction, body paragraphs, and a conclusion. Write 4-6 paragraphs. Use a neutral, informative tone. Be factual and educational. Avoid marketing language, emojis, and unnecessary markdown lists. Output in English only.";

/// A fully rendered instruction template with its sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Prompt {
    fn new(system: impl Into<String>, user: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            system: system.into(),
            user,
            max_tokens,
            temperature,
        }
    }

    pub fn into_request(self, model: &str) -> CompletionRequest {
        CompletionRequest {
            model: model.to_owned(),
            system_prompt: self.system,
            user_prompt: self.user,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    pub fn excerpt(content: &str) -> Self {
        Self::new(
            EXCERPT_SYSTEM,
            format!(
                "Create an excerpt for this blog post content (max 300 characters):\n\n{}",
                truncate_chars(content, 2000)
            ),
            150,
            0.7,
        )
    }

    pub fn seo_title(title: &str, content: &str) -> Self {
        Self::new(
            SEO_TITLE_SYSTEM,
            format!(
                "Original title: {title}\n\nContent: {}\n\nGenerate an SEO-optimized title.",
                truncate_chars(content, 1000)
            ),
            100,
            0.7,
        )
    }

    pub fn seo_metadata(title: &str, content: &str) -> Self {
        Self::new(
            format!("You are an SEO expert writing metadata for a technical blog.\n\n{SEO_RULES}"),
            format!("Title: {title}\n\nContent: {}", truncate_chars(content, 2000)),
            200,
            0.5,
        )
    }

    pub fn localized_seo(title: &str, content: &str, locale: Locale) -> Self {
        let language = locale.language_name();
        Self::new(
            format!(
                "You are an SEO expert writing metadata for a technical blog in {language}.\n\n{SEO_RULES}"
            ),
            format!(
                "Title: {title}\n\nContent: {}\n\nGenerate SEO title (max 60 chars) and meta description (max 160 chars) in {language} based strictly on this content.",
                truncate_chars(content, 2000)
            ),
            200,
            0.5,
        )
    }

    pub fn rewrite(content: &str, instruction: &str) -> Self {
        Self::new(
            REWRITE_SYSTEM,
            format!("Content to rewrite:\n\n{content}\n\nInstruction: {instruction}"),
            2000,
            0.7,
        )
    }

    pub fn polish(content: &str) -> Self {
        Self::new(
            POLISH_SYSTEM,
            format!(
                "Rewrite this blog post content to be clearer and more professional:\n\n{content}"
            ),
            4000,
            0.7,
        )
    }

    pub fn full_post(title: &str) -> Self {
        Self::new(
            FULL_POST_SYSTEM,
            format!("Generate a full blog post for this title: {title}"),
            2000,
            0.7,
        )
    }

    pub fn translate_content(content: &str, locale: Locale) -> Self {
        let language = locale.language_name();
        Self::new(
            format!(
                "You are a professional translator. Translate the provided blog post content to {language}. Preserve all HTML tags, markdown formatting, and structure exactly as they appear. Only translate the text content, not the markup. Maintain the same tone and style as the original."
            ),
            format!("Translate this blog post content to {language}:\n\n{content}"),
            4000,
            0.3,
        )
    }

    pub fn translate_excerpt(excerpt: &str, locale: Locale) -> Self {
        let language = locale.language_name();
        Self::new(
            format!(
                "You are a professional translator. Translate the provided blog post excerpt to {language}. Maintain the same tone and style as the original. Output plain text only, no markdown."
            ),
            format!("Translate this blog post excerpt to {language}:\n\n{excerpt}"),
            200,
            0.3,
        )
    }
}
