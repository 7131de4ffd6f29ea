//! In-memory post storage.
//!
//! Posts live for the process lifetime only. The store is owned by
//! `AppState` and shared across requests; the lock is the only mutable
//! shared state in the application.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a post and return the stored record.
    pub fn insert(&self, title: String, content: String, author_id: String) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            title,
            content,
            author_id,
            created_at: OffsetDateTime::now_utc(),
        };
        self.posts.write().push(post.clone());
        post
    }

    /// All posts in insertion order.
    pub fn list(&self) -> Vec<Post> {
        self.posts.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::PostStore;

    #[test]
    fn insert_preserves_order_and_author() {
        let store = PostStore::new();

        let first = store.insert(
            "First".to_string(),
            "Hello".to_string(),
            "publisher-001".to_string(),
        );
        let second = store.insert(
            "Second".to_string(),
            "World".to_string(),
            "publisher-001".to_string(),
        );

        let posts = store.list();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[1].id, second.id);
        assert_eq!(posts[0].author_id, "publisher-001");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn empty_store_lists_nothing() {
        assert!(PostStore::new().list().is_empty());
    }
}
