//! Web server module for relaying storage notifications.
//!
//! A single endpoint, `POST /`, decodes the notification in the configured
//! shape and publishes it to the queue before responding.

pub mod handlers;
pub mod middleware;

use axum::{http::HeaderValue, routing::post, Router};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

pub use handlers::{method_not_allowed, not_found, relay, AppState, EMPTY_BODY_ACK};
pub use middleware::{log_request, recover_panic, SECURITY_HEADERS};

/// Build the relay router with its full middleware chain.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", post(relay).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state);

    // Layers wrap inside-out: the last one added runs first.
    for (name, value) in SECURITY_HEADERS {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }

    app.layer(axum::middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(recover_panic))
}
