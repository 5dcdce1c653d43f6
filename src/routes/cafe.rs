use axum::{extract::Query, Extension};
use tracing::{debug, warn};

use crate::error::QueryError;
use crate::models::cafe::{find_cafes, CafeParams};
use crate::SharedCatalog;

pub async fn handler(
    Extension(catalog): Extension<SharedCatalog>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, QueryError> {
    let params = CafeParams::from_pairs(pairs);
    debug!(?params, "Cafe handler is run");

    match find_cafes(catalog.as_ref(), params) {
        Ok(cafes) => Ok(cafes.join(",")),
        Err(e) => {
            warn!(error = %e, "rejected cafe query");
            Err(e)
        }
    }
}
