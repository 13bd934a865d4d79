use employee_service::{
    api::{auth::BasicAuthCredentials, router::build_app, state::EmployeeAppState},
    config::EmployeeServiceConfig,
    domain::service::EmployeeService,
    infrastructure::employee::PgEmployeeRepository,
};
use sqlx::postgres::PgPoolOptions;
use std::{env, sync::Arc};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "employee-service";

#[tokio::main]
async fn main() {
    let _guard = shared::telemetry::init_telemetry(SERVICE_NAME);

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let port = env::var("SERVER_PORT").unwrap_or_else(|_| "8090".to_string());
    let config_path = env::var("EMPLOYEE_SERVICE_CONFIG_PATH")
        .unwrap_or_else(|_| "employee-service.toml".to_string());
    let config = EmployeeServiceConfig::load(&config_path)
        .expect("Failed to load employee-service config")
        .with_env_overrides();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to establish connection into Postgres");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let employee_service = Arc::new(EmployeeService::new(Arc::new(PgEmployeeRepository::new(
        pool,
    ))));
    let state = Arc::new(EmployeeAppState { employee_service });

    let credentials = Arc::new(
        BasicAuthCredentials::new(&config.auth.username, &config.auth.password)
            .expect("Failed to hash the Basic auth password"),
    );

    let app = build_app(state, credentials, &config).expect("Invalid CORS allowed origin");

    tracing::info!(
        base_path = %config.base_path,
        cors_origin = %config.cors.allowed_origin,
        "{SERVICE_NAME} listening on 0.0.0.0:{port}"
    );

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown::shutdown_signal(SERVICE_NAME))
        .await
        .expect("Server terminated unexpectedly");

    tracing::info!("{SERVICE_NAME} shut down");
}
