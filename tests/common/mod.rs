//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_blog::db::{DbPool, establish_connection_pool};
use pushkind_blog::domain::post::{NewComment, NewPost};
use pushkind_blog::domain::types::{AuthorName, Category, PostBody, PostTitle};
use pushkind_blog::repository::{DieselRepository, PostWriter};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Creation time of the `n`-th newest sample post.
pub fn minutes_ago(n: i32) -> NaiveDateTime {
    DateTime::from_timestamp(1_700_000_000 - i64::from(n) * 60, 0)
        .unwrap()
        .naive_utc()
}

pub fn new_post(title: &str, category: Category, body: &str, created_at: NaiveDateTime) -> NewPost {
    NewPost {
        title: PostTitle::capitalized(title).unwrap(),
        author: AuthorName::capitalized("ada").unwrap(),
        body: PostBody::new(body).unwrap(),
        image: String::new(),
        category,
        created_at,
    }
}

/// Insert `count` posts titled "Post 1".."Post N", "Post 1" being the newest.
pub fn seed_posts(repo: &DieselRepository, count: i32, category: Category) {
    for n in 1..=count {
        let post = new_post(&format!("post {n}"), category, "lorem ipsum", minutes_ago(n));
        repo.create_post(&post, &[NewComment::placeholder()])
            .expect("should create post");
    }
}
