use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct AddUser {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Users in insertion order plus the next id to hand out.
pub struct Store {
    users: Vec<User>,
    next_id: i64,
}

impl Store {
    fn seeded(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self { users, next_id }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

pub type Db = Arc<RwLock<Store>>;

type NotFound = (StatusCode, Json<ErrorBody>);

fn not_found() -> NotFound {
    (StatusCode::NOT_FOUND, Json(ErrorBody { error: "user not found" }))
}

pub fn app() -> Router {
    app_with_users(Vec::new())
}

/// Router whose store starts with `users`, listed in the given order.
pub fn app_with_users(users: Vec<User>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(users)));
    Router::new()
        .route("/users", get(list_users).post(add_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    tracing::debug!(count = store.users.len(), "list users");
    Json(store.users.clone())
}

async fn add_user(
    State(db): State<Db>,
    Json(input): Json<AddUser>,
) -> (StatusCode, Json<User>) {
    let mut store = db.write().await;
    let user = User {
        id: store.next_id,
        name: input.name,
        email: input.email,
    };
    store.next_id += 1;
    store.users.push(user.clone());
    tracing::debug!(id = user.id, "created user");
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<User>, NotFound> {
    let store = db.read().await;
    let index = store.position(id).ok_or_else(not_found)?;
    Ok(Json(store.users[index].clone()))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<AddUser>,
) -> Result<Json<User>, NotFound> {
    let mut store = db.write().await;
    let index = store.position(id).ok_or_else(not_found)?;
    let user = &mut store.users[index];
    user.name = input.name;
    user.email = input.email;
    tracing::debug!(id, "updated user");
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, NotFound> {
    let mut store = db.write().await;
    let index = store.position(id).ok_or_else(not_found)?;
    store.users.remove(index);
    tracing::debug!(id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}
