use super::PostCommandService;
use crate::{
    application::{
        dto::{PostDto, SessionState},
        error::ApplicationResult,
    },
    domain::post::{NewPost, PostContent, PostExcerpt, PostId, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub excerpt: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    published: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn seo(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.seo_title = Some(title.into());
        self.seo_description = Some(description.into());
        self
    }

    pub const fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            content: self.content.unwrap_or_default(),
            excerpt: self.excerpt,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            published: self.published,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        session: &SessionState,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        session.ensure_authenticated()?;

        let title = PostTitle::new(command.title)?;
        let slug = self
            .slug_service
            .derive(command.slug.as_deref(), &title)?;
        self.slug_service.ensure_available(&slug, None).await?;

        let now = self.clock.now();
        let new_post = NewPost {
            id: PostId::generate(),
            title,
            slug,
            content: PostContent::new(command.content),
            excerpt: PostExcerpt::new(command.excerpt.unwrap_or_default()),
            seo_title: non_blank(command.seo_title),
            seo_description: non_blank(command.seo_description),
            published: command.published,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        self.invalidate(&created).await;
        Ok(created.into())
    }
}
