use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState, app_url: &str) -> Router<()> {
    let app = Router::new()
        .route("/", get(|| async { "Portfolio API is up" }))
        .nest("/api/GlobalSearch", routes::search::router())
        .nest("/api/Products", routes::products::router())
        .nest("/api/Solutions", routes::solutions::router())
        .nest("/api/Publications", routes::publications::router())
        .nest("/api/Repositories", routes::listings::router());

    // The static frontend is served from app_url; only it may call the API from a browser.
    let app_url = app_url.trim_end_matches('/').to_string();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
