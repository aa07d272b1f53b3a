use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::info;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::error::LookupError;
use crate::lookup::{LookupService, SearchParams};
use crate::record::SearchResult;
use crate::sheets::SheetSource;

/// Build the application router around a lookup service.
pub fn router<S: SheetSource + 'static>(service: LookupService<S>) -> Router {
    let state = Arc::new(service);

    Router::new()
        .route("/", get(serve_landing))
        .route("/lookup", get(lookup::<S>))
        .route("/api/check-marksheet", get(lookup::<S>))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

pub async fn run<S: SheetSource + 'static>(
    addr: &str,
    service: LookupService<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data_source = service.source().describe();
    let app = router(service);

    // Start server
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{} (data source: {})", listener.local_addr()?, data_source);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_landing() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

async fn lookup<S: SheetSource>(
    State(service): State<Arc<LookupService<S>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResult>, LookupError> {
    let result = service.lookup(SearchParams::from_pairs(pairs)).await?;
    Ok(Json(result))
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
