use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthorName, Category, CommentId, PostBody, PostId, PostTitle};

/// A published blog post together with its comments in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub author: AuthorName,
    pub body: PostBody,
    /// Image reference as typed by the author, usually a URL.
    pub image: String,
    pub category: Category,
    pub created_at: NaiveDateTime,
    pub comments: Vec<Comment>,
}

/// Lightweight projection used by listings and the sidebar.
///
/// Listings never render comments so they are not loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: PostTitle,
    pub author: AuthorName,
    pub body: PostBody,
    pub image: String,
    pub category: Category,
    pub created_at: NaiveDateTime,
}

/// A comment attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub commenter: String,
    pub comment: String,
}

/// Data required to insert a new [`Post`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: PostTitle,
    pub author: AuthorName,
    pub body: PostBody,
    pub image: String,
    pub category: Category,
    pub created_at: NaiveDateTime,
}

/// Data required to append a [`Comment`] to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub commenter: String,
    pub comment: String,
}

impl NewComment {
    /// Empty entry every freshly composed post starts with.
    pub fn placeholder() -> Self {
        Self {
            commenter: String::new(),
            comment: String::new(),
        }
    }
}
