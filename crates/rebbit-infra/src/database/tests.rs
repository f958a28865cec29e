use rebbit_core::domain::{Comment, Post};
use rebbit_core::ports::{BaseRepository, CommentRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::{comment, post};
use crate::database::postgres_repo::{PostgresCommentRepository, PostgresPostRepository};

/// `fragment` as it appears inside the `Debug` rendering of a transaction log.
fn as_logged(fragment: &str) -> String {
    format!("{fragment:?}").trim_matches('"').to_owned()
}

fn post_model(id: &str, upvotes: i32) -> post::Model {
    post::Model {
        id: id.to_owned(),
        title: Some("Test Post".to_owned()),
        content: Some("Content".to_owned()),
        author: Some("Anon #1234".to_owned()),
        category: Some("Tech".to_owned()),
        image_url: None,
        upvotes,
        created_at: Some("2025-01-01T10:00:00Z".to_owned()),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model("p1", 3)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id("p1".to_owned()).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, "p1");
    assert_eq!(post.title.as_deref(), Some("Test Post"));
    assert_eq!(post.upvotes, 3);
    assert!(post.comments.is_empty());
}

#[tokio::test]
async fn test_save_post_upserts_and_returns_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model("p1", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved = repo
        .save(Post {
            id: "p1".to_owned(),
            title: Some("Test Post".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(saved.id, "p1");

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("INSERT INTO"));
    assert!(log.contains("ON CONFLICT"));
}

#[tokio::test]
async fn test_add_upvotes_returns_updated_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model("p1", 11)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo.add_upvotes("p1", 1).await.unwrap().unwrap();
    assert_eq!(post.upvotes, 11);
}

#[tokio::test]
async fn test_add_upvotes_on_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.add_upvotes("ghost", -1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_lowercases_both_columns() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model("p1", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let found = repo.search("TEST").await.unwrap();
    assert_eq!(found.len(), 1);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("LOWER"));
    assert!(log.contains("LIKE"));
    assert!(log.contains("%test%"));
}

#[tokio::test]
async fn test_search_matches_wildcards_literally() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.search("50%_a\\b").await.unwrap().is_empty());

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("ESCAPE"));
    assert!(log.contains(&as_logged("%50\\%\\_a\\\\b%")));
}

#[tokio::test]
async fn test_comments_order_ties_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<comment::Model>::new()])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);

    repo.find_by_post_ids(&["p1".to_owned()]).await.unwrap();

    let log = format!("{:?}", repo.db.into_transaction_log());
    let order = r#""created_at" ASC NULLS LAST, "comments"."id" ASC"#;
    assert!(log.contains(&as_logged(order)));
}

#[tokio::test]
async fn test_find_comments_by_post_ids() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![comment::Model {
            id: "c1".to_owned(),
            post_id: "p1".to_owned(),
            text: Some("Nice post!".to_owned()),
            author: None,
            image_url: None,
            created_at: None,
        }]])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);

    let comments: Vec<Comment> = repo.find_by_post_ids(&["p1".to_owned()]).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].post_id, "p1");
    assert_eq!(comments[0].text.as_deref(), Some("Nice post!"));
}

#[tokio::test]
async fn test_delete_comments_of_post_reports_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 2,
        }])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);

    assert_eq!(repo.delete_by_post_id("p1").await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_an_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, String>::delete(&repo, "ghost".to_owned()).await;
    assert!(result.is_ok());
}
