use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header::InvalidHeaderValue},
    middleware,
    routing::get,
};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{OpenApi, openapi::server::Server};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{
        auth::{BasicAuthCredentials, require_basic_auth},
        handler::{employee, greeting},
        message::MESSAGE_HEADER,
        state::EmployeeAppState,
    },
    config::EmployeeServiceConfig,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        employee::find_all,
        employee::find_by_id,
        employee::find_by_name,
        employee::create,
        employee::update,
        employee::delete,
        greeting::hello,
        greeting::hi,
    ),
    tags(
        (name = "Employees", description = "Employee records"),
        (name = "Greetings", description = "Static greetings"),
    )
)]
pub struct ApiDoc;

/// Routes relative to the configured base path.
pub fn employee_routes() -> Router<Arc<EmployeeAppState>> {
    Router::new()
        .route(
            "/employees",
            get(employee::find_all)
                .post(employee::create)
                .put(employee::update),
        )
        .route(
            "/employees/{id}",
            get(employee::find_by_id).delete(employee::delete),
        )
        .route("/employees/name/{name}", get(employee::find_by_name))
        .route("/hello", get(greeting::hello))
        .route("/hi", get(greeting::hi))
}

/// CORS for the single SPA origin. Other origins get no CORS headers at all.
/// Credentials are allowed, so request headers are mirrored instead of using
/// a wildcard.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin.trim().trim_end_matches('/'))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([MESSAGE_HEADER]))
}

/// Assembles the full application: routes under the base path, Swagger UI,
/// Basic auth, CORS and request tracing.
pub fn build_app(
    state: Arc<EmployeeAppState>,
    credentials: Arc<BasicAuthCredentials>,
    config: &EmployeeServiceConfig,
) -> Result<Router, InvalidHeaderValue> {
    let routes = employee_routes().with_state(state);
    let base_path = config.normalized_base_path();

    let mut doc = ApiDoc::openapi();
    let api = match base_path {
        Some(base_path) => {
            doc.servers = Some(vec![Server::new(base_path.as_str())]);
            Router::new().nest(&base_path, routes)
        }
        None => routes,
    };

    let app = api
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
        .layer(middleware::from_fn_with_state(credentials, require_basic_auth))
        .layer(cors_layer(&config.cors.allowed_origin)?)
        // tracing log (turn request into info level)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        );

    Ok(app)
}
