use chrono::Utc;

use crate::domain::post::NewComment;
use crate::domain::types::{PostId, PostTitle};
use crate::dto::posts::{PostPageDto, RecentTitles};
use crate::forms::posts::{CommentFormPayload, ComposeFormPayload};
use crate::repository::{PostReader, PostWriter, RepositoryError};

use super::main::recent_titles;
use super::{ServiceError, ServiceResult};

/// Post detail page. The title from the URL is capitalized before lookup.
pub fn show_post<R>(title: &str, repo: &R) -> ServiceResult<PostPageDto>
where
    R: PostReader,
{
    let title = PostTitle::capitalized(title).map_err(|_| ServiceError::NotFound)?;
    let recent = recent_titles(repo)?;

    match repo.get_post_by_title(&title) {
        Ok(Some(post)) => Ok(PostPageDto::new(post, recent)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get post '{title}': {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Append a comment to an existing post and return its title for the
/// redirect back to the detail page.
pub fn add_comment<R>(payload: CommentFormPayload, repo: &R) -> ServiceResult<PostTitle>
where
    R: PostWriter,
{
    match repo.append_comment(&payload.title, &payload.comment) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(payload.title),
        Err(e) => {
            log::error!("Failed to append comment to '{}': {e}", payload.title);
            Err(ServiceError::Internal)
        }
    }
}

/// Sidebar data for the compose form; only logged-in authors may see it.
pub fn show_compose<R>(user: Option<&str>, repo: &R) -> ServiceResult<RecentTitles>
where
    R: PostReader,
{
    if user.is_none() {
        return Err(ServiceError::Unauthorized);
    }
    recent_titles(repo)
}

/// Create a post stamped with the current time. Every new post starts with
/// one empty placeholder comment.
pub fn create_post<R>(
    payload: ComposeFormPayload,
    user: Option<&str>,
    repo: &R,
) -> ServiceResult<PostId>
where
    R: PostWriter,
{
    let Some(user) = user else {
        return Err(ServiceError::Unauthorized);
    };

    let post = payload.into_new_post(Utc::now().naive_utc());
    match repo.create_post(&post, &[NewComment::placeholder()]) {
        Ok(id) => {
            log::info!("{user} published post {id} '{}'", post.title);
            Ok(id)
        }
        Err(RepositoryError::ConflictError(_)) => Err(ServiceError::Conflict(format!(
            "A post titled \"{}\" already exists.",
            post.title
        ))),
        Err(e) => {
            log::error!("Failed to create post: {e}");
            Err(ServiceError::Internal)
        }
    }
}
