use crate::logging::{REQUEST_ID_HEADER, record_response, request_span};
use crate::modules::auth::router::init_auth_router;
use crate::modules::customers::router::init_customers_router;
use crate::modules::home::router::init_home_router;
use crate::state::AppState;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_home_router())
        .merge(init_auth_router())
        .nest("/customers", init_customers_router())
        .with_state(state.clone())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(())
                .on_response(record_response)
                .on_failure(()),
        )
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .expose_headers([
                    axum::http::header::LOCATION,
                    HeaderName::from_static(REQUEST_ID_HEADER),
                ])
                .allow_credentials(true)
        })
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
