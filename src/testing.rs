//! In-process stand-in for the remote posts API, answering the way the real
//! backend does.

use crate::api::PostsApi;
use crate::blog::{Post, PostDraft, PostID};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    posts: RwLock<BTreeMap<PostID, Post>>,
    next_id: RwLock<PostID>,
    failure: RwLock<Option<StatusCode>>,
}

pub struct MockApi {
    store: Arc<Store>,
    base_url: String,
}

impl MockApi {
    pub async fn start() -> MockApi {
        let store = Arc::new(Store::default());
        let app = axum::Router::new()
            .route("/api/posts", get(list).post(create))
            .route("/api/posts/:id", get(show).put(update).delete(delete))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        MockApi {
            store,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn client(&self) -> PostsApi {
        PostsApi::new(&self.base_url, std::time::Duration::from_secs(5)).unwrap()
    }

    pub async fn insert(&self, draft: PostDraft) -> PostID {
        insert(&self.store, draft).await.id
    }

    pub async fn post(&self, id: PostID) -> Option<Post> {
        self.store.posts.read().await.get(&id).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.posts.read().await.is_empty()
    }

    /// Every following request is answered with `status`.
    pub async fn fail_with(&self, status: StatusCode) {
        *self.store.failure.write().await = Some(status);
    }

    pub async fn recover(&self) {
        *self.store.failure.write().await = None;
    }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn insert(store: &Store, draft: PostDraft) -> Post {
    let mut next_id = store.next_id.write().await;
    *next_id += 1;

    let now = chrono::Utc::now();
    let post = Post {
        id: *next_id,
        title: draft.title,
        content: draft.content,
        author: draft.author,
        created_at: Some(now),
        updated_at: Some(now),
    };
    store.posts.write().await.insert(post.id, post.clone());
    post
}

async fn forced_failure(store: &Store) -> Option<Response> {
    let failure = *store.failure.read().await;
    failure.map(|status| (status, "forced failure").into_response())
}

async fn list(State(store): State<Arc<Store>>) -> Response {
    if let Some(failure) = forced_failure(&store).await {
        return failure;
    }
    let posts = store.posts.read().await.values().cloned().collect::<Vec<_>>();
    Json(posts).into_response()
}

async fn show(State(store): State<Arc<Store>>, Path(id): Path<PostID>) -> Response {
    if let Some(failure) = forced_failure(&store).await {
        return failure;
    }
    match store.posts.read().await.get(&id) {
        Some(post) => Json(post.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Post not found").into_response(),
    }
}

async fn create(State(store): State<Arc<Store>>, Json(draft): Json<PostDraft>) -> Response {
    if let Some(failure) = forced_failure(&store).await {
        return failure;
    }
    Json(insert(&store, draft).await).into_response()
}

async fn update(
    State(store): State<Arc<Store>>,
    Path(id): Path<PostID>,
    Json(draft): Json<PostDraft>,
) -> Response {
    if let Some(failure) = forced_failure(&store).await {
        return failure;
    }
    let mut posts = store.posts.write().await;
    let Some(post) = posts.get_mut(&id) else {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    };

    post.title = draft.title;
    post.content = draft.content;
    post.author = draft.author;
    post.updated_at = Some(chrono::Utc::now());

    Json(post.clone()).into_response()
}

async fn delete(State(store): State<Arc<Store>>, Path(id): Path<PostID>) -> Response {
    if let Some(failure) = forced_failure(&store).await {
        return failure;
    }
    match store.posts.write().await.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => (StatusCode::NOT_FOUND, "Post not found").into_response(),
    }
}
