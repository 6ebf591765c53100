use crate::domain::post::PostSummary;
use crate::domain::types::Category;
use crate::dto::posts::{
    CategoryPageDto, HomePageDto, PostCardDto, RecentTitles, SearchPageDto,
};
use crate::pagination::{POSTS_PER_PAGE, PageRequest, Paginated};
use crate::repository::{PostListQuery, PostReader};

use super::{ServiceError, ServiceResult};

/// Number of titles in the "recent articles" sidebar.
pub const RECENT_TITLES: usize = 10;
/// Number of posts highlighted above the home feed.
pub const FEATURED_POSTS: usize = 3;

fn recent_posts<R>(repo: &R) -> ServiceResult<Vec<PostSummary>>
where
    R: PostReader,
{
    repo.list_recent_posts(RECENT_TITLES).map_err(|e| {
        log::error!("Failed to list recent posts: {e}");
        ServiceError::Internal
    })
}

/// Titles of the newest posts for the sidebar.
pub fn recent_titles<R>(repo: &R) -> ServiceResult<RecentTitles>
where
    R: PostReader,
{
    Ok(recent_posts(repo)?.into_iter().map(|p| p.title).collect())
}

/// Resolve `request` against the posts matching `query`.
///
/// An empty result set is not an error; it yields an empty page with both
/// pager buttons disabled.
fn load_page<R>(
    query: PostListQuery,
    request: PageRequest,
    repo: &R,
) -> ServiceResult<Paginated<PostCardDto>>
where
    R: PostReader,
{
    let page = request.effective_page();

    match repo.list_posts(query.paginate(page, POSTS_PER_PAGE)) {
        Ok((total, posts)) => {
            Ok(Paginated::new(posts, page, POSTS_PER_PAGE, total).map(PostCardDto::from))
        }
        Err(e) => {
            log::error!("Failed to list posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the home feed.
pub fn show_home<R>(request: PageRequest, repo: &R) -> ServiceResult<HomePageDto>
where
    R: PostReader,
{
    let recent = recent_posts(repo)?;
    let featured = recent
        .iter()
        .take(FEATURED_POSTS)
        .cloned()
        .map(PostCardDto::from)
        .collect();
    let recent = recent.into_iter().map(|p| p.title).collect();

    let posts = load_page(PostListQuery::default(), request, repo)?;

    Ok(HomePageDto {
        posts,
        featured,
        recent,
    })
}

/// Feed restricted to one category. The category is validated by the caller.
pub fn show_category<R>(
    category: Category,
    request: PageRequest,
    repo: &R,
) -> ServiceResult<CategoryPageDto>
where
    R: PostReader,
{
    let recent = recent_titles(repo)?;
    let posts = load_page(PostListQuery::default().category(category), request, repo)?;

    Ok(CategoryPageDto {
        category,
        posts,
        recent,
    })
}

/// Posts whose body contains `search`, ignoring case.
pub fn show_search<R>(search: &str, request: PageRequest, repo: &R) -> ServiceResult<SearchPageDto>
where
    R: PostReader,
{
    let recent = recent_titles(repo)?;
    let posts = load_page(PostListQuery::default().search(search), request, repo)?;

    Ok(SearchPageDto {
        search: search.to_string(),
        posts,
        recent,
    })
}
