// tests/post_command_service_unit.rs
use std::sync::Arc;

use inkpress::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, SetPublishStateCommand, UpdatePostCommand,
};
use inkpress::application::dto::SessionState;
use inkpress::application::error::ApplicationError;
use inkpress::application::queries::posts::{GetLocalizedPostQuery, GetPublishedPostQuery};
use inkpress::domain::errors::DomainError;
use inkpress::domain::post::{Locale, LocalizedField, PostId};

mod support;

use support::{PostBuilder, ScriptedCompletion, TestContext, build_context};

const ADMIN: SessionState = SessionState::Authenticated;

fn context() -> TestContext {
    build_context(Arc::new(ScriptedCompletion::always("")))
}

fn update(id: PostId) -> UpdatePostCommand {
    UpdatePostCommand {
        id,
        title: None,
        slug: None,
        content: None,
        excerpt: None,
        seo_title: None,
        seo_description: None,
        published: None,
    }
}

#[tokio::test]
async fn create_derives_slug_from_title_and_invalidates_views() {
    let ctx = context();
    let command = CreatePostCommand::builder()
        .title("Hello, World!")
        .content("First post.")
        .build()
        .unwrap();

    let post = ctx
        .services
        .post_commands
        .create_post(&ADMIN, command)
        .await
        .unwrap();

    assert_eq!(post.slug, "hello-world");
    assert!(!post.published);
    assert_eq!(ctx.store.len(), 1);

    let paths = ctx.views.all_paths();
    assert!(paths.contains(&"/blog/hello-world".to_string()));
    assert!(paths.contains(&format!("/admin/posts/{}/edit", post.id)));
    assert!(paths.contains(&"/".to_string()));
}

#[tokio::test]
async fn create_rejects_taken_slug() {
    let ctx = context();
    ctx.store.seed(PostBuilder::new("Existing", "hello-world").build());

    let command = CreatePostCommand::builder()
        .title("Another")
        .slug("Hello World")
        .build()
        .unwrap();
    let err = ctx
        .services
        .post_commands
        .create_post(&ADMIN, command)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DuplicateSlug(ref slug)) if slug == "hello-world"
    ));
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn anonymous_callers_cannot_mutate() {
    let ctx = context();
    let command = CreatePostCommand::builder().title("Nope").build().unwrap();
    let err = ctx
        .services
        .post_commands
        .create_post(&SessionState::Anonymous, command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
    assert_eq!(ctx.store.len(), 0);
}

#[tokio::test]
async fn blank_title_is_a_validation_error() {
    let ctx = context();
    let command = CreatePostCommand::builder().title("   ").build().unwrap();
    let err = ctx
        .services
        .post_commands
        .create_post(&ADMIN, command)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "validation_failed");
}

#[tokio::test]
async fn slug_change_invalidates_old_and_new_paths() {
    let ctx = context();
    let post = PostBuilder::new("Rust", "rust").published().build();
    let id = post.id;
    ctx.store.seed(post);

    let updated = ctx
        .services
        .post_commands
        .update_post(
            &ADMIN,
            UpdatePostCommand {
                slug: Some("Rust in 2025".into()),
                ..update(id)
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "rust-in-2025");
    let paths = ctx.views.all_paths();
    assert!(paths.contains(&"/blog/rust".to_string()));
    assert!(paths.contains(&"/blog/rust-in-2025".to_string()));
}

#[tokio::test]
async fn blank_seo_value_clears_the_column() {
    let ctx = context();
    let post = PostBuilder::new("Rust", "rust")
        .seo("Old title", "Old description")
        .build();
    let id = post.id;
    ctx.store.seed(post);

    let updated = ctx
        .services
        .post_commands
        .update_post(
            &ADMIN,
            UpdatePostCommand {
                seo_title: Some("  ".into()),
                ..update(id)
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.seo_title, None);
    assert_eq!(updated.seo_description.as_deref(), Some("Old description"));
}

#[tokio::test]
async fn empty_update_returns_post_without_writing() {
    let ctx = context();
    let post = PostBuilder::new("Rust", "rust").build();
    let id = post.id;
    ctx.store.seed(post);

    let unchanged = ctx
        .services
        .post_commands
        .update_post(&ADMIN, update(id))
        .await
        .unwrap();

    assert_eq!(unchanged.slug, "rust");
    assert_eq!(ctx.store.writes(), 0);
    assert!(ctx.views.batches().is_empty());
}

#[tokio::test]
async fn deleting_a_missing_post_is_not_found_and_touches_nothing() {
    let ctx = context();
    let err = ctx
        .services
        .post_commands
        .delete_post(&ADMIN, DeletePostCommand { id: PostId::generate() })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert!(ctx.views.batches().is_empty());
}

#[tokio::test]
async fn delete_removes_post_and_invalidates() {
    let ctx = context();
    let post = PostBuilder::new("Gone", "gone").published().build();
    let id = post.id;
    ctx.store.seed(post);

    ctx.services
        .post_commands
        .delete_post(&ADMIN, DeletePostCommand { id })
        .await
        .unwrap();

    assert!(ctx.store.get(id).is_none());
    assert!(ctx.views.all_paths().contains(&"/blog/gone".to_string()));
}

#[tokio::test]
async fn publish_toggle_is_skipped_when_state_matches() {
    let ctx = context();
    let post = PostBuilder::new("Draft", "draft").build();
    let id = post.id;
    ctx.store.seed(post);

    let same = ctx
        .services
        .post_commands
        .set_publish_state(&ADMIN, SetPublishStateCommand { id, publish: false })
        .await
        .unwrap();
    assert!(!same.published);
    assert_eq!(ctx.store.writes(), 0);

    let published = ctx
        .services
        .post_commands
        .set_publish_state(&ADMIN, SetPublishStateCommand { id, publish: true })
        .await
        .unwrap();
    assert!(published.published);
    assert_eq!(ctx.store.writes(), 1);
}

#[tokio::test]
async fn drafts_are_invisible_to_public_reads() {
    let ctx = context();
    ctx.store.seed(PostBuilder::new("Draft", "draft").build());
    ctx.store
        .seed(PostBuilder::new("Live", "live").published().build());

    let err = ctx
        .services
        .post_queries
        .get_published_post(GetPublishedPostQuery {
            slug: "draft".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let listed = ctx.services.post_queries.list_published().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].slug, "live");
}

#[tokio::test]
async fn admin_listing_is_newest_first_and_stats_count_drafts() {
    let ctx = context();
    ctx.store
        .seed(PostBuilder::new("Old", "old").published().created_days_ago(3).build());
    ctx.store.seed(PostBuilder::new("New", "new").build());

    let posts = ctx
        .services
        .post_queries
        .list_posts(&ADMIN)
        .await
        .unwrap();
    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["new", "old"]);

    let stats = ctx.services.post_queries.post_stats(&ADMIN).await.unwrap();
    assert_eq!((stats.total, stats.published, stats.drafts), (2, 1, 1));
}

#[tokio::test]
async fn localized_view_serves_cached_columns_only() {
    let ctx = context();
    ctx.store.seed(
        PostBuilder::new("Live", "live")
            .published()
            .localized(Locale::Ru, LocalizedField::TranslatedContent, "Текст")
            .build(),
    );

    let view = ctx
        .services
        .post_queries
        .get_localized_post(GetLocalizedPostQuery {
            slug: "live".into(),
            locale: Locale::Ru,
        })
        .await
        .unwrap();

    assert_eq!(view.content.as_deref(), Some("Текст"));
    assert_eq!(view.excerpt, None);
    assert_eq!(view.seo_title, None);
}
