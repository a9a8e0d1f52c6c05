use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use community_service::db::{self, SharedStore};
use community_service::handlers;
use community_service::middleware::MetricsMiddleware;
use community_service::openapi::ApiDoc;
use community_service::{AppState, Config};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Probe the running service; used as a container healthcheck.
async fn run_healthcheck(port: u16) -> io::Result<()> {
    let url = format!("http://127.0.0.1:{}/", port);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

/// Build the store client. Any failure leaves the service running on
/// sample data rather than aborting startup.
async fn init_store(config: &Config) -> Option<SharedStore> {
    let store = match db::connect_store(&config.database) {
        Ok(store) => store?,
        Err(e) => {
            tracing::error!("Document store initialization failed: {}", e);
            return None;
        }
    };

    tracing::info!("Using {} document store", store.backend());
    match store.prepare().await {
        Ok(()) => tracing::info!("✅ Document store ready"),
        Err(e) => tracing::warn!(
            "Document store not reachable at startup ({}); listings will use sample data until it is",
            e
        ),
    }

    Some(store)
}

/// Study Group Community Service
///
/// Serves community content with graceful degradation to sample data.
///
/// # Routes
///
/// - `GET /api/groups`, `/api/sessions/upcoming`, `/api/discussions/latest`,
///   `/api/goals`, `/api/notes` - listings, `?limit=` optional
/// - `POST /api/signup` - registration
/// - `GET /test` - store diagnostics
/// - `GET /` - liveness message
/// - `GET /metrics` - Prometheus metrics
#[actix_web::main]
async fn main() -> io::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Support container healthchecks via CLI subcommand: `healthcheck`
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        return run_healthcheck(config.app.port).await;
    }

    tracing::info!("Starting community-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    tracing::debug!(?config, "Loaded configuration");

    let store = init_store(&config).await;
    if store.is_none() {
        tracing::warn!("No document store configured; all listings will serve sample data");
    }

    let state = web::Data::new(AppState::new(store, &config));
    let openapi_doc = ApiDoc::openapi();

    let http_bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();
    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), openapi_doc.clone()),
            )
            .wrap(cors)
            .wrap(MetricsMiddleware)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(community_service::metrics::serve_metrics),
            )
            .configure(handlers::configure)
    })
    .bind(&http_bind_address)?
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let result = tokio::select! {
        joined = &mut server_task => joined,
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task.await
        }
    };

    tracing::info!("Community-service shutting down");

    match result {
        Ok(served) => served,
        Err(e) => {
            tracing::error!("Server task join error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, e.to_string()))
        }
    }
}
