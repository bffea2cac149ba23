//! End-to-end tests for the data-access layer against an in-memory store.

use newsdesk::db::Store;
use newsdesk::error::Error;

async fn memory_store() -> Store {
    Store::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store")
}

async fn add_user(store: &Store, username: &str, email: &str) -> i32 {
    store
        .add_user(username, email, None, None, None)
        .await
        .expect("failed to add user")
}

#[tokio::test]
async fn create_user_then_list_contains_it() {
    let store = memory_store().await;

    let id = store
        .add_user("alice", "alice@example.com", Some(30), Some("555-0100"), Some("editor"))
        .await
        .unwrap();

    let users = store.list_users(None).await.unwrap();
    assert_eq!(users.len(), 1);

    let user = &users[0];
    assert_eq!(user.id, id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.age, Some(30));
    assert_eq!(user.contact_number.as_deref(), Some("555-0100"));
    assert_eq!(user.occupation.as_deref(), Some("editor"));
}

#[tokio::test]
async fn list_users_filters_by_username_substring() {
    let store = memory_store().await;
    add_user(&store, "alice", "alice@example.com").await;
    add_user(&store, "bob", "bob@example.com").await;

    let matched = store.list_users(Some("lic")).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].username, "alice");

    let none = store.list_users(Some("zzz")).await.unwrap();
    assert!(none.is_empty());

    let all = store.list_users(None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn create_user_rejects_malformed_email() {
    let store = memory_store().await;

    let err = store
        .add_user("bob", "not-an-email", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // No row was inserted by the failed attempt.
    assert!(store.list_users(None).await.unwrap().is_empty());

    store
        .add_user("bob", "a@b.co", None, None, None)
        .await
        .expect("minimal well-formed email should be accepted");
}

#[tokio::test]
async fn create_user_rejects_empty_required_fields() {
    let store = memory_store().await;

    let err = store
        .add_user("   ", "a@b.co", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = store.add_user("carol", "", None, None, None).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let store = memory_store().await;
    add_user(&store, "alice", "alice@example.com").await;

    let err = store
        .add_user("alice", "other@example.com", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let store = memory_store().await;
    add_user(&store, "alice", "alice@example.com").await;

    let err = store
        .add_user("bob", "alice@example.com", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[tokio::test]
async fn deleting_user_cascades_to_news() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;

    for i in 0..3 {
        store
            .add_news(uid, &format!("post {i}"), "body")
            .await
            .unwrap();
    }
    assert_eq!(store.list_news_for_user(uid).await.unwrap().len(), 3);

    assert!(store.delete_user(uid).await.unwrap());

    assert!(store.list_news_for_user(uid).await.unwrap().is_empty());
    assert!(store.list_news(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn news_filter_matches_title_body_or_author() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;
    let other = add_user(&store, "bob", "bob@example.com").await;

    store.add_news(uid, "Launch", "rocket").await.unwrap();
    store.add_news(other, "Weather", "sunny").await.unwrap();

    for term in ["rocket", "Launch", "alice"] {
        let posts = store.list_news(Some(term)).await.unwrap();
        assert_eq!(posts.len(), 1, "filter '{term}' should match exactly one post");
        assert_eq!(posts[0].post.title, "Launch");
        assert_eq!(posts[0].author.as_deref(), Some("alice"));
    }

    assert!(store.list_news(Some("zzz")).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_news_rejects_empty_title_or_body() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;

    let err = store.add_news(uid, "  ", "body").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = store.add_news(uid, "title", "").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // A body of only trailing newlines counts as empty too.
    let err = store.add_news(uid, "title", "\n\n").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(store.list_news(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_news_for_unknown_user_is_not_found() {
    let store = memory_store().await;

    let err = store.add_news(999, "title", "body").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(store.list_news(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn news_listing_is_newest_first() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;

    store.add_news(uid, "first", "body").await.unwrap();
    // Timestamps have one-second resolution.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    store.add_news(uid, "second", "body").await.unwrap();

    let posts = store.list_news(None).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].post.title, "second");
    assert_eq!(posts[1].post.title, "first");

    let for_user = store.list_news_for_user(uid).await.unwrap();
    assert_eq!(for_user[0].title, "second");
}

#[tokio::test]
async fn update_news_on_missing_id_is_not_found() {
    let store = memory_store().await;

    let err = store.update_news(42, "title", "body", None).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn update_user_on_missing_id_is_not_found() {
    let store = memory_store().await;

    let err = store
        .update_user(42, "ghost", "ghost@example.com", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn update_user_email_round_trip() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;

    store
        .update_user(uid, "alice", "new@example.com", Some(31), None, None)
        .await
        .unwrap();

    let users = store.list_users(None).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "new@example.com");
    assert_eq!(users[0].age, Some(31));
}

#[tokio::test]
async fn update_news_can_reassign_owner() {
    let store = memory_store().await;
    let alice = add_user(&store, "alice", "alice@example.com").await;
    let bob = add_user(&store, "bob", "bob@example.com").await;

    let post_id = store.add_news(alice, "handover", "body").await.unwrap();

    // Title/body-only entry point leaves the owner alone.
    store
        .update_news(post_id, "handover v2", "new body", None)
        .await
        .unwrap();
    assert_eq!(store.list_news_for_user(alice).await.unwrap().len(), 1);

    // The by-username entry point reassigns.
    store
        .update_news(post_id, "handover v2", "new body", Some(bob))
        .await
        .unwrap();

    assert!(store.list_news_for_user(alice).await.unwrap().is_empty());
    let bobs = store.list_news_for_user(bob).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].title, "handover v2");
    assert_eq!(bobs[0].body, "new body");
}

#[tokio::test]
async fn find_user_id_by_username_resolves() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;

    assert_eq!(store.find_user_id_by_username("alice").await.unwrap(), Some(uid));
    assert_eq!(store.find_user_id_by_username("nobody").await.unwrap(), None);
}

#[tokio::test]
async fn delete_news_reports_whether_anything_matched() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;
    let post_id = store.add_news(uid, "title", "body").await.unwrap();

    assert!(store.delete_news(post_id).await.unwrap());
    assert!(!store.delete_news(post_id).await.unwrap());
}

#[tokio::test]
async fn schema_init_is_idempotent_on_file_store() {
    let db_path = std::env::temp_dir().join(format!(
        "newsdesk-test-{}.db",
        std::process::id()
    ));
    let url = format!("sqlite:{}", db_path.display());

    {
        let store = Store::connect(&url).await.unwrap();
        add_user(&store, "alice", "alice@example.com").await;
    }

    // Reconnecting must be a no-op for the schema and keep existing rows.
    let store = Store::connect(&url).await.unwrap();
    store.ping().await.unwrap();
    assert_eq!(store.list_users(None).await.unwrap().len(), 1);

    drop(store);
    std::fs::remove_file(&db_path).ok();
}

#[tokio::test]
async fn news_body_keeps_interior_newlines() {
    let store = memory_store().await;
    let uid = add_user(&store, "alice", "alice@example.com").await;

    let id = store
        .add_news(uid, "multi", "line one\nline two\n")
        .await
        .unwrap();

    let post = store.get_news(id).await.unwrap().unwrap();
    assert_eq!(post.body, "line one\nline two");
}
