use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::post::{NewComment, NewPost};
use crate::domain::types::{AuthorName, Category, PostBody, PostTitle};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct ComposeForm {
    #[serde(rename = "postTitle")]
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(rename = "postAuthor")]
    #[validate(length(min = 1))]
    pub author: String,
    #[serde(rename = "postContext")]
    #[validate(length(min = 1))]
    pub body: String,
    #[serde(rename = "postImg", default)]
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposeFormPayload {
    pub title: PostTitle,
    pub author: AuthorName,
    pub body: PostBody,
    pub image: String,
    pub category: Category,
}

impl ComposeFormPayload {
    pub fn into_new_post(self, created_at: NaiveDateTime) -> NewPost {
        NewPost {
            title: self.title,
            author: self.author,
            body: self.body,
            image: self.image,
            category: self.category,
            created_at,
        }
    }
}

impl TryFrom<ComposeForm> for ComposeFormPayload {
    type Error = FormError;

    fn try_from(value: ComposeForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: PostTitle::capitalized(&value.title)?,
            author: AuthorName::capitalized(&value.author)?,
            body: PostBody::new(value.body)?,
            image: value.image.trim().to_string(),
            category: value.category.trim().parse()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(rename = "postTitle")]
    pub title: String,
    #[serde(default)]
    pub commenter: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentFormPayload {
    /// Exact stored title, as rendered into the hidden form field.
    pub title: PostTitle,
    pub comment: NewComment,
}

impl TryFrom<CommentForm> for CommentFormPayload {
    type Error = FormError;

    fn try_from(value: CommentForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: PostTitle::new(value.title)?,
            comment: NewComment {
                commenter: value.commenter.trim().to_string(),
                comment: value.comment.trim().to_string(),
            },
        })
    }
}
