use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    contacts: Vec<Contact>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/contact", post(create_contact).get(list_contacts))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_contacts(State(db): State<Db>) -> Json<Vec<Contact>> {
    Json(db.read().await.contacts.clone())
}

/// Store the contact and answer with its id as the whole JSON body.
async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<CreateContact>,
) -> (StatusCode, Json<i64>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let id = store.next_id;
    store.contacts.push(Contact {
        id,
        name: input.name,
        phone: input.phone,
        email: input.email,
    });
    info!(id, "contact stored");
    (StatusCode::CREATED, Json(id))
}
