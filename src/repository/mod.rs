//! Data access traits and their Diesel-backed implementation.

use crate::db::{DbConnection, DbPool};
use crate::domain::post::{NewComment, NewPost, Post, PostSummary};
use crate::domain::subscriber::{NewSubscriber, Subscriber};
use crate::domain::types::{Category, PostId, PostTitle, SubscriberId, UserId, Username};
use crate::domain::user::{NewUser, User};
use crate::pagination::Pagination;

pub mod errors;
pub mod post;
pub mod subscriber;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching posts.
///
/// Results are always ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    /// Restrict to a single category.
    pub category: Option<Category>,
    /// Case-insensitive substring of the post body.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl PostListQuery {
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

/// Read-only operations for posts.
pub trait PostReader {
    /// Newest posts first, at most `limit` of them.
    fn list_recent_posts(&self, limit: usize) -> RepositoryResult<Vec<PostSummary>>;
    /// Total number of matching posts and the requested page of them.
    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<PostSummary>)>;
    /// Exact title lookup including comments in insertion order.
    fn get_post_by_title(&self, title: &PostTitle) -> RepositoryResult<Option<Post>>;
}

/// Write operations for posts.
pub trait PostWriter {
    /// Insert a post together with its initial comments.
    fn create_post(&self, post: &NewPost, comments: &[NewComment]) -> RepositoryResult<PostId>;
    /// Append a comment to the post with exactly this title. Returns the
    /// number of comments written, zero when no such post exists.
    fn append_comment(&self, title: &PostTitle, comment: &NewComment) -> RepositoryResult<usize>;
}

pub trait SubscriberReader {
    /// All subscribers in sign-up order.
    fn list_subscribers(&self) -> RepositoryResult<Vec<Subscriber>>;
}

pub trait SubscriberWriter {
    fn create_subscriber(&self, subscriber: &NewSubscriber) -> RepositoryResult<SubscriberId>;
}

pub trait UserReader {
    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    /// Persist a new user. Fails with [`RepositoryError::ConflictError`] when
    /// the username is taken.
    fn create_user(&self, user: &NewUser) -> RepositoryResult<UserId>;
}
