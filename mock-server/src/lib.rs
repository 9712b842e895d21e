//! Stand-in for the hosted data service the clinic site reads from.
//!
//! Four collections of schemaless JSON records. Every collection can be
//! listed with equality filters and an ordering key; only `consultations`
//! accepts new records.

pub mod query;
pub mod seed;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

use crate::query::ListQuery;

pub use axum::Router as ServiceRouter;

pub const COLLECTIONS: [&str; 4] = ["procedures", "blog_posts", "testimonials", "consultations"];
pub const WRITABLE: &str = "consultations";

pub type Db = Arc<RwLock<HashMap<String, Vec<Value>>>>;

/// Service with every collection empty.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Service preloaded with `(collection, record)` pairs, kept in the given
/// order. Records for unknown collections are ignored.
pub fn app_with(records: Vec<(&str, Value)>) -> Router {
    let mut collections: HashMap<String, Vec<Value>> = COLLECTIONS
        .iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();
    for (collection, record) in records {
        if let Some(slot) = collections.get_mut(collection) {
            slot.push(record);
        }
    }
    let db: Db = Arc::new(RwLock::new(collections));
    Router::new()
        .route("/{collection}", get(list_records).post(create_record))
        .with_state(db)
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_records(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Value>>, (StatusCode, String)> {
    let query = ListQuery::parse(pairs).map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;
    let collections = db.read().await;
    let records = collections
        .get(&collection)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown collection `{collection}`")))?;
    Ok(Json(query.apply(records)))
}

async fn create_record(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Json(input): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, String)> {
    if !COLLECTIONS.contains(&collection.as_str()) {
        return Err((StatusCode::NOT_FOUND, format!("unknown collection `{collection}`")));
    }
    if collection != WRITABLE {
        return Err((
            StatusCode::METHOD_NOT_ALLOWED,
            format!("collection `{collection}` is read-only"),
        ));
    }

    let mut record = input;
    record.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    record
        .entry("created_at")
        .or_insert_with(|| Value::String(chrono::Utc::now().to_rfc3339()));
    let record = Value::Object(record);

    tracing::info!(collection = %collection, "record created");
    db.write()
        .await
        .entry(collection)
        .or_default()
        .push(record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}
