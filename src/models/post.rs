use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{
    Comment as DomainComment, NewPost as DomainNewPost, Post as DomainPost, PostSummary,
};
use crate::domain::types::{AuthorName, PostBody, PostTitle, TypeConstraintError};

/// Diesel model representing the `posts` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::posts)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub body: String,
    pub image: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub body: String,
    pub image: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

/// Diesel model representing the `comments` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Post))]
#[diesel(table_name = crate::schema::comments)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub commenter: String,
    pub comment: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment<'a> {
    pub post_id: i32,
    pub commenter: &'a str,
    pub comment: &'a str,
}

impl TryFrom<Post> for PostSummary {
    type Error = TypeConstraintError;

    fn try_from(post: Post) -> Result<Self, Self::Error> {
        Ok(Self {
            id: post.id.try_into()?,
            title: PostTitle::new(post.title)?,
            author: AuthorName::new(post.author)?,
            body: PostBody::new(post.body)?,
            image: post.image,
            category: post.category.parse()?,
            created_at: post.created_at,
        })
    }
}

impl TryFrom<Comment> for DomainComment {
    type Error = TypeConstraintError;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: comment.id.try_into()?,
            commenter: comment.commenter,
            comment: comment.comment,
        })
    }
}

impl TryFrom<(Post, Vec<Comment>)> for DomainPost {
    type Error = TypeConstraintError;

    fn try_from((post, comments): (Post, Vec<Comment>)) -> Result<Self, Self::Error> {
        let summary = PostSummary::try_from(post)?;
        let comments = comments
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<DomainComment>, _>>()?;

        Ok(Self {
            id: summary.id,
            title: summary.title,
            author: summary.author,
            body: summary.body,
            image: summary.image,
            category: summary.category,
            created_at: summary.created_at,
            comments,
        })
    }
}

impl From<DomainNewPost> for NewPost {
    fn from(post: DomainNewPost) -> Self {
        Self {
            title: post.title.into_inner(),
            author: post.author.into_inner(),
            body: post.body.into_inner(),
            image: post.image,
            category: post.category.as_str().to_string(),
            created_at: post.created_at,
        }
    }
}
