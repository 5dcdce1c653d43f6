use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::SharedCatalog;

pub async fn health(Extension(catalog): Extension<SharedCatalog>) -> Json<Value> {
    Json(json!({
        "status": "Healthy",
        "cities": catalog.city_count(),
    }))
}
