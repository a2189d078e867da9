use axum::Router;
use axum::http::Method;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};


pub fn build_router(app_state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/user", get(handlers::user::profile_handler))
        .route(
            "/training",
            get(handlers::training::find_training_handler)
                .post(handlers::training::create_training_handler)
                .patch(handlers::training::update_training_handler)
                .delete(handlers::training::delete_training_handler),
        )
        .route(
            "/training-result",
            get(handlers::training_result::find_training_result_handler)
                .post(handlers::training_result::create_training_result_handler)
                .patch(handlers::training_result::update_training_result_handler)
                .delete(handlers::training_result::delete_training_result_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_bearer_auth,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/register", post(handlers::auth::register_handler))
        .route("/auth/login", post(handlers::auth::login_handler));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}

/// Any origin is reflected back so browser clients can send credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
