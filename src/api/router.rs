//! API router.
//!
//! Returns a composable `Router` with every entity route nested under the
//! configured prefix. Collection routes answer with and without the
//! trailing slash (`/doctors` and `/doctors/`).
//!
//! Layer order (outermost → innermost): CORS → access log → handler.

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router, nesting all routes under `prefix`
/// (`""` mounts them at the root).
pub fn api_router(core: Arc<CoreState>, prefix: &str) -> Router {
    build_router(ApiContext::new(core), prefix)
}

fn build_router(ctx: ApiContext, prefix: &str) -> Router {
    let doctors = get(endpoints::doctors::list).post(endpoints::doctors::create);
    let patients = get(endpoints::patients::list).post(endpoints::patients::create);
    let appointments = get(endpoints::appointments::list).post(endpoints::appointments::create);
    let medications = get(endpoints::medications::list).post(endpoints::medications::create);
    let prescriptions =
        get(endpoints::prescriptions::list).post(endpoints::prescriptions::create);

    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    // Static segments such as `/appointments/schedule` win over `:id`.
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/doctors", doctors.clone())
        .route("/doctors/", doctors)
        .route(
            "/doctors/:id",
            get(endpoints::doctors::detail).delete(endpoints::doctors::remove),
        )
        .route("/patients", patients.clone())
        .route("/patients/", patients)
        .route(
            "/patients/:id",
            get(endpoints::patients::detail).delete(endpoints::patients::remove),
        )
        .route("/appointments", appointments.clone())
        .route("/appointments/", appointments)
        .route("/appointments/schedule", get(endpoints::appointments::schedule))
        .route(
            "/appointments/:id",
            get(endpoints::appointments::detail).delete(endpoints::appointments::remove),
        )
        .route("/medications", medications.clone())
        .route("/medications/", medications)
        .route(
            "/medications/:id",
            get(endpoints::medications::detail).delete(endpoints::medications::remove),
        )
        .route("/prescriptions", prescriptions.clone())
        .route("/prescriptions/", prescriptions)
        .route(
            "/prescriptions/:id",
            get(endpoints::prescriptions::detail).delete(endpoints::prescriptions::remove),
        )
        .with_state(ctx);

    let app = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    };

    app.layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}
