use pushkind_blog::domain::post::NewComment;
use pushkind_blog::domain::subscriber::NewSubscriber;
use pushkind_blog::domain::types::{Category, PostTitle, SubscriberEmail, Username};
use pushkind_blog::domain::user::NewUser;
use pushkind_blog::pagination::POSTS_PER_PAGE;
use pushkind_blog::repository::{
    PostListQuery, PostReader, PostWriter, RepositoryError, SubscriberReader, SubscriberWriter,
    UserReader, UserWriter,
};

mod common;

use common::{minutes_ago, new_post, seed_posts};

fn titles<T: AsRef<str>>(titles: impl IntoIterator<Item = T>) -> Vec<String> {
    titles.into_iter().map(|t| t.as_ref().to_string()).collect()
}

#[test]
fn pages_walk_posts_newest_first() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_posts(&repo, 10, Category::Category1);

    let (total, first) = repo
        .list_posts(PostListQuery::default().paginate(1, POSTS_PER_PAGE))
        .expect("should list first page");
    let (_, second) = repo
        .list_posts(PostListQuery::default().paginate(2, POSTS_PER_PAGE))
        .expect("should list second page");
    let (_, third) = repo
        .list_posts(PostListQuery::default().paginate(3, POSTS_PER_PAGE))
        .expect("should list third page");

    assert_eq!(total, 10);
    assert_eq!(
        titles(first.iter().map(|p| p.title.as_str())),
        ["Post 1", "Post 2", "Post 3", "Post 4"]
    );
    assert_eq!(
        titles(second.iter().map(|p| p.title.as_str())),
        ["Post 5", "Post 6", "Post 7", "Post 8"]
    );
    assert_eq!(
        titles(third.iter().map(|p| p.title.as_str())),
        ["Post 9", "Post 10"]
    );
}

#[test]
fn recent_posts_are_bounded() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_posts(&repo, 12, Category::Category2);

    let recent = repo.list_recent_posts(10).expect("should list recent posts");

    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].title, "Post 1");
    assert_eq!(recent[9].title, "Post 10");
}

#[test]
fn category_filter_only_counts_matching_posts() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    for (n, category) in [
        (1, Category::Category1),
        (2, Category::Category2),
        (3, Category::Category2),
    ] {
        repo.create_post(
            &new_post(&format!("post {n}"), category, "body", minutes_ago(n)),
            &[],
        )
        .expect("should create post");
    }

    let (total, items) = repo
        .list_posts(
            PostListQuery::default()
                .category(Category::Category2)
                .paginate(1, POSTS_PER_PAGE),
        )
        .expect("should list category");

    assert_eq!(total, 2);
    assert!(items.iter().all(|p| p.category == Category::Category2));
}

#[test]
fn search_is_case_insensitive_and_literal() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let bodies = ["Learning RUST", "rust belt", "100% done", "1000 done"];
    for (n, body) in bodies.iter().enumerate() {
        let n = n as i32 + 1;
        repo.create_post(
            &new_post(&format!("post {n}"), Category::Category1, body, minutes_ago(n)),
            &[],
        )
        .expect("should create post");
    }

    let (total, _) = repo
        .list_posts(PostListQuery::default().search("rust"))
        .expect("should search");
    assert_eq!(total, 2);

    let (total, items) = repo
        .list_posts(PostListQuery::default().search("0%"))
        .expect("should search");
    assert_eq!(total, 1);
    assert_eq!(items[0].title, "Post 3");
}

#[test]
fn search_folds_non_ascii_case() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let bodies = ["Über Ärger", "Straße und Öl", "plain ascii"];
    for (n, body) in bodies.iter().enumerate() {
        let n = n as i32 + 1;
        repo.create_post(
            &new_post(&format!("post {n}"), Category::Category1, body, minutes_ago(n)),
            &[],
        )
        .expect("should create post");
    }

    for term in ["über", "ÜBER", "ärger"] {
        let (total, items) = repo
            .list_posts(PostListQuery::default().search(term))
            .expect("should search");
        assert_eq!(total, 1, "{term}");
        assert_eq!(items[0].title, "Post 1");
    }

    let (total, items) = repo
        .list_posts(PostListQuery::default().search("ÖL"))
        .expect("should search");
    assert_eq!(total, 1);
    assert_eq!(items[0].title, "Post 2");
}

#[test]
fn page_beyond_addressable_range_is_empty() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_posts(&repo, 6, Category::Category1);

    for page in [1_000_000, usize::MAX / 2, usize::MAX] {
        let (total, items) = repo
            .list_posts(PostListQuery::default().paginate(page, POSTS_PER_PAGE))
            .expect("should list");
        assert_eq!(total, 6, "page {page}");
        assert!(items.is_empty(), "page {page}");
    }
}

#[test]
fn empty_store_lists_nothing() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let (total, items) = repo
        .list_posts(PostListQuery::default().paginate(1, POSTS_PER_PAGE))
        .expect("should list");

    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[test]
fn duplicate_title_is_rejected() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let post = new_post("unique", Category::Category1, "body", minutes_ago(1));

    repo.create_post(&post, &[]).expect("first insert succeeds");
    let err = repo.create_post(&post, &[]).unwrap_err();

    assert!(matches!(err, RepositoryError::ConflictError(_)));
}

#[test]
fn comments_are_appended_in_order() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_posts(&repo, 1, Category::Category3);
    let title = PostTitle::new("Post 1").unwrap();

    for text in ["first", "second"] {
        let affected = repo
            .append_comment(
                &title,
                &NewComment {
                    commenter: "Bob".into(),
                    comment: text.into(),
                },
            )
            .expect("should append comment");
        assert_eq!(affected, 1);
    }

    let post = repo
        .get_post_by_title(&title)
        .expect("should load post")
        .expect("post exists");

    let texts: Vec<&str> = post.comments.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(texts, ["", "first", "second"]);
}

#[test]
fn comment_on_missing_post_writes_nothing() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let affected = repo
        .append_comment(
            &PostTitle::new("Ghost").unwrap(),
            &NewComment::placeholder(),
        )
        .expect("should not fail");

    assert_eq!(affected, 0);
}

#[test]
fn title_lookup_is_exact() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_posts(&repo, 1, Category::Category1);

    let found = repo
        .get_post_by_title(&PostTitle::new("post 1").unwrap())
        .expect("should query");

    assert!(found.is_none());
}

#[test]
fn same_email_subscribes_twice() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let subscriber = NewSubscriber {
        email: SubscriberEmail::new("reader@example.com").unwrap(),
    };

    let first = repo.create_subscriber(&subscriber).unwrap();
    let second = repo.create_subscriber(&subscriber).unwrap();

    assert_ne!(first, second);
    assert_eq!(repo.list_subscribers().unwrap().len(), 2);
}

#[test]
fn usernames_are_unique() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let user = NewUser {
        username: Username::new("writer@example.com").unwrap(),
        password_hash: "$argon2id$placeholder".into(),
        phone: Some("555-0100".into()),
    };

    repo.create_user(&user).expect("first insert succeeds");
    let err = repo.create_user(&user).unwrap_err();
    assert!(matches!(err, RepositoryError::ConflictError(_)));

    let stored = repo
        .get_user_by_username(&user.username)
        .unwrap()
        .expect("user exists");
    assert_eq!(stored.phone.as_deref(), Some("555-0100"));
}
