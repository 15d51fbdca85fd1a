use async_trait::async_trait;

use crate::domain::post::{PostId, PostSlug};

/// Receives the paths whose rendered views went stale after a write.
#[async_trait]
pub trait ViewInvalidator: Send + Sync {
    async fn invalidate(&self, paths: &[String]);
}

/// Paths rendered from a single post: admin list and editor, blog index,
/// the post page and the home page.
pub fn post_view_paths(id: PostId, slug: &PostSlug) -> Vec<String> {
    vec![
        "/admin/posts".to_owned(),
        format!("/admin/posts/{id}/edit"),
        "/blog".to_owned(),
        format!("/blog/{slug}"),
        "/".to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_cover_admin_and_public_views() {
        let id = PostId::generate();
        let slug = PostSlug::new("hello-world").unwrap();
        let paths = post_view_paths(id, &slug);
        assert!(paths.contains(&format!("/admin/posts/{id}/edit")));
        assert!(paths.contains(&"/blog/hello-world".to_owned()));
        assert!(paths.contains(&"/".to_owned()));
    }
}
