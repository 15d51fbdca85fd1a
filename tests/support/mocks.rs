// tests/support/mocks.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use inkpress::application::ApplicationResult;
use inkpress::application::error::ApplicationError;
use inkpress::application::ports::{
    completion::{CompletionClient, CompletionRequest},
    time::Clock,
    views::ViewInvalidator,
};
use inkpress::domain::errors::{DomainError, DomainResult};
use inkpress::domain::post::{
    NewPost, Post, PostCounts, PostId, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};

/// Both repository ports over one vector, enforcing slug uniqueness like the
/// `posts_slug_key` constraint does.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
    writes: AtomicUsize,
    broken_reads: AtomicBool,
}

impl InMemoryPostStore {
    pub fn seed(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }

    pub fn get(&self, id: PostId) -> Option<Post> {
        self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// Make every subsequent `find_by_id` fail like a dropped connection.
    pub fn break_reads(&self) {
        self.broken_reads.store(true, Ordering::SeqCst);
    }

    /// Number of successful inserts and updates.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::DuplicateSlug(post.slug.to_string()));
        }
        let post = post.into_post();
        posts.push(post.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(post)
    }

    async fn update_fields(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(slug) = &update.slug {
            if posts.iter().any(|p| &p.slug == slug && p.id != update.id) {
                return Err(DomainError::DuplicateSlug(slug.to_string()));
            }
        }
        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.apply(&update);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        if self.broken_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.slug == slug)
            .cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| include_drafts || p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn counts(&self) -> DomainResult<PostCounts> {
        let posts = self.posts.lock().unwrap();
        Ok(PostCounts {
            total: posts.len() as u64,
            published: posts.iter().filter(|p| p.published).count() as u64,
        })
    }
}

/// Answers from a queue, then repeats `fallback`. Records every request.
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<String>>,
    fallback: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn always(reply: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn sequence<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fallback: String::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, request: CompletionRequest) -> ApplicationResult<String> {
        self.requests.lock().unwrap().push(request);
        let next = self.replies.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}

pub enum Failure {
    Upstream,
    MissingKey,
}

/// Every call fails the given way.
pub struct FailingCompletion {
    failure: Failure,
    calls: AtomicUsize,
}

impl FailingCompletion {
    pub const fn new(failure: Failure) -> Self {
        Self {
            failure,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn complete(&self, _request: CompletionRequest) -> ApplicationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(match self.failure {
            Failure::Upstream => ApplicationError::upstream(Some(500), "model overloaded"),
            Failure::MissingKey => ApplicationError::configuration("completion API key is not set"),
        })
    }
}

#[derive(Default)]
pub struct RecordingInvalidator {
    batches: Mutex<Vec<Vec<String>>>,
}

impl RecordingInvalidator {
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn all_paths(&self) -> Vec<String> {
        self.batches().into_iter().flatten().collect()
    }
}

#[async_trait]
impl ViewInvalidator for RecordingInvalidator {
    async fn invalidate(&self, paths: &[String]) {
        self.batches.lock().unwrap().push(paths.to_vec());
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
