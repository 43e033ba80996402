//! In-process stand-in for the remote placeholder posts service.
//!
//! Reproduces the backing service's observed behavior, quirks included:
//! a non-numeric id segment is 404 (not 400), and updating an id that was
//! never assigned is 500 (not 404). Create requires a complete payload
//! (title, body, userId) and rejects anything less with 400.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Partial update payload; omitted fields keep their stored values.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<u64>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Post>>>;

/// Number of posts the store is seeded with, ids 1..=SEED_COUNT.
pub const SEED_COUNT: u64 = 100;

fn seed() -> BTreeMap<u64, Post> {
    (1..=SEED_COUNT)
        .map(|id| {
            let post = Post {
                id,
                title: format!("Post {id} title"),
                body: format!("Post {id} body"),
                // Ten posts per user, like the real placeholder service.
                user_id: (id - 1) / 10 + 1,
            };
            (id, post)
        })
        .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seed()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The remote treats an unparseable id segment the same as a missing post.
fn parse_id(segment: &str) -> Result<u64, StatusCode> {
    segment.parse().map_err(|_| StatusCode::NOT_FOUND)
}

/// A create payload is complete when title and body are strings and userId
/// is an integer. Anything less is a 400.
fn is_complete(payload: &Value) -> bool {
    payload.get("title").is_some_and(Value::is_string)
        && payload.get("body").is_some_and(Value::is_string)
        && payload.get("userId").is_some_and(Value::is_u64)
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    Json(posts.values().cloned().collect())
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Post>, StatusCode> {
    let id = parse_id(&id)?;
    let posts = db.read().await;
    posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_post(
    State(db): State<Db>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Post>), StatusCode> {
    if !is_complete(&payload) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut posts = db.write().await;
    let id = posts.keys().next_back().copied().unwrap_or(0) + 1;
    let post = Post {
        id,
        title: payload["title"].as_str().unwrap_or_default().to_string(),
        body: payload["body"].as_str().unwrap_or_default().to_string(),
        user_id: payload["userId"].as_u64().unwrap_or_default(),
    };
    posts.insert(id, post.clone());
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Post>, StatusCode> {
    let id = parse_id(&id)?;
    let patch: PostPatch =
        serde_json::from_value(payload).map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut posts = db.write().await;
    // Updating an id that was never assigned reproduces the backing
    // service's observed behavior: a server error, not a 404.
    let post = posts.get_mut(&id).ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Some(title) = patch.title {
        post.title = title;
    }
    if let Some(body) = patch.body {
        post.body = body;
    }
    if let Some(user_id) = patch.user_id {
        post.user_id = user_id;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let id = parse_id(&id)?;
    let mut posts = db.write().await;
    posts
        .remove(&id)
        .map(|_| Json(Value::Object(serde_json::Map::new())))
        .ok_or(StatusCode::NOT_FOUND)
}
