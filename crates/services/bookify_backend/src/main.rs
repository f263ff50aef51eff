// File: services/bookify_backend/src/main.rs
mod service_factory;

use axum::{routing::get, Router};
use bookify_appointments::handlers::BookingState;
use bookify_appointments::routes as booking_routes;
use bookify_common::services::ServiceFactory;
use bookify_config::load_config;
use bookify_db::{AppointmentRepository, DbClient, SqlAppointmentRepository};
use service_factory::BookifyServiceFactory;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    bookify_common::logging::init();

    // Storage first: the schema must exist before any request comes in,
    // and initialization is idempotent across restarts.
    let db_client = DbClient::new(&config)
        .await
        .expect("Failed to connect to database");
    let repository: Arc<dyn AppointmentRepository> =
        Arc::new(SqlAppointmentRepository::new(db_client));
    repository
        .init_schema()
        .await
        .expect("Failed to initialize database schema");

    let factory = BookifyServiceFactory::new(config.clone());
    let booking_state = Arc::new(BookingState {
        config: config.clone(),
        repository,
        notifier: factory.notification_service(),
    });

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Bookify API!" }))
        .merge(booking_routes::routes(booking_state));

    #[allow(unused_mut)] // mutable for openapi / debug additions below
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use bookify_appointments::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Bookify API",
                version = "0.1.0",
                description = "Bookify Service API Docs"
            ),
            components(),
            tags( (name = "Bookify", description = "Consultation booking endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the booking form frontend in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from dist");
        app = app.fallback_service(ServeDir::new("dist"));
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
