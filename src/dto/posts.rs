//! View-models handed to the templates.

use serde::Serialize;

use crate::domain::post::{Post, PostSummary};
use crate::domain::types::{Category, PostTitle};
use crate::pagination::Paginated;

/// Titles of the newest posts shown in every page's sidebar.
pub type RecentTitles = Vec<PostTitle>;

/// A post as it appears in a listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostCardDto {
    pub title: String,
    pub author: String,
    pub body: String,
    pub image: String,
    pub category: String,
    /// Formatted creation date.
    pub date: String,
}

impl From<PostSummary> for PostCardDto {
    fn from(value: PostSummary) -> Self {
        Self {
            title: value.title.into_inner(),
            author: value.author.into_inner(),
            body: value.body.into_inner(),
            image: value.image,
            category: value.category.to_string(),
            date: value.created_at.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Home feed: the listing plus the three newest posts as featured cards.
#[derive(Debug, Clone, Serialize)]
pub struct HomePageDto {
    pub posts: Paginated<PostCardDto>,
    pub featured: Vec<PostCardDto>,
    pub recent: RecentTitles,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPageDto {
    pub category: Category,
    pub posts: Paginated<PostCardDto>,
    pub recent: RecentTitles,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPageDto {
    pub search: String,
    pub posts: Paginated<PostCardDto>,
    pub recent: RecentTitles,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub commenter: String,
    pub comment: String,
}

/// Post detail page.
#[derive(Debug, Clone, Serialize)]
pub struct PostPageDto {
    pub post: PostCardDto,
    pub comments: Vec<CommentDto>,
    pub recent: RecentTitles,
}

impl PostPageDto {
    pub fn new(post: Post, recent: RecentTitles) -> Self {
        let comments = post
            .comments
            .into_iter()
            .map(|c| CommentDto {
                commenter: c.commenter,
                comment: c.comment,
            })
            .collect();
        let card = PostCardDto::from(PostSummary {
            id: post.id,
            title: post.title,
            author: post.author,
            body: post.body,
            image: post.image,
            category: post.category,
            created_at: post.created_at,
        });
        Self {
            post: card,
            comments,
            recent,
        }
    }
}
