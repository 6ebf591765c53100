use diesel::prelude::*;

use crate::db::unicode_lower;
use crate::domain::post::{NewComment, NewPost, Post, PostSummary};
use crate::domain::types::{PostId, PostTitle};
use crate::models::post::{
    Comment as DbComment, NewComment as DbNewComment, NewPost as DbNewPost, Post as DbPost,
};
use crate::repository::{DieselRepository, PostListQuery, PostReader, PostWriter, RepositoryResult};

/// Escape `LIKE` wildcards so the search term matches literally.
fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl PostReader for DieselRepository {
    fn list_recent_posts(&self, limit: usize) -> RepositoryResult<Vec<PostSummary>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let items = posts::table
            .order((posts::created_at.desc(), posts::id.desc()))
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .select(DbPost::as_select())
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<PostSummary>, _>>()?;

        Ok(items)
    }

    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<PostSummary>)> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = posts::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(category) = query.category {
                items = items.filter(posts::category.eq(category.as_str()));
            }

            if let Some(search) = &query.search {
                let pattern = like_pattern(&search.to_lowercase());
                items = items.filter(unicode_lower(posts::body).like(pattern).escape('\\'));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            // A window past what SQLite can address holds nothing.
            let (Ok(offset), Ok(limit)) = (
                i64::try_from(pagination.offset()),
                i64::try_from(pagination.per_page),
            ) else {
                return Ok((total, Vec::new()));
            };
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order((posts::created_at.desc(), posts::id.desc()))
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<PostSummary>, _>>()?;

        Ok((total, items))
    }

    fn get_post_by_title(&self, title: &PostTitle) -> RepositoryResult<Option<Post>> {
        use crate::schema::{comments, posts};

        let mut conn = self.conn()?;

        let post = match posts::table
            .filter(posts::title.eq(title.as_str()))
            .select(DbPost::as_select())
            .first::<DbPost>(&mut conn)
            .optional()?
        {
            Some(post) => post,
            None => return Ok(None),
        };

        let comments = DbComment::belonging_to(&post)
            .order(comments::id.asc())
            .select(DbComment::as_select())
            .load::<DbComment>(&mut conn)?;

        Ok(Some(Post::try_from((post, comments))?))
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, post: &NewPost, comments: &[NewComment]) -> RepositoryResult<PostId> {
        use crate::schema::{comments as comments_table, posts};

        let mut conn = self.conn()?;
        let db_post: DbNewPost = post.clone().into();

        let post_id = conn.transaction(|conn| {
            let post_id = diesel::insert_into(posts::table)
                .values(&db_post)
                .returning(posts::id)
                .get_result::<i32>(conn)?;

            let rows = comments
                .iter()
                .map(|c| DbNewComment {
                    post_id,
                    commenter: &c.commenter,
                    comment: &c.comment,
                })
                .collect::<Vec<_>>();

            if !rows.is_empty() {
                diesel::insert_into(comments_table::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            Ok::<_, diesel::result::Error>(post_id)
        })?;

        Ok(PostId::new(post_id)?)
    }

    fn append_comment(&self, title: &PostTitle, comment: &NewComment) -> RepositoryResult<usize> {
        use crate::schema::{comments, posts};

        let mut conn = self.conn()?;

        let post_id = posts::table
            .filter(posts::title.eq(title.as_str()))
            .select(posts::id)
            .first::<i32>(&mut conn)
            .optional()?;

        let Some(post_id) = post_id else {
            return Ok(0);
        };

        let affected = diesel::insert_into(comments::table)
            .values(DbNewComment {
                post_id,
                commenter: &comment.commenter,
                comment: &comment.comment,
            })
            .execute(&mut conn)?;

        Ok(affected)
    }
}
