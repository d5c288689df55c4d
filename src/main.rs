mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::categories::{routes as categories_routes, services::CategoryService};
use crate::features::contact::{routes as contact_routes, services::ContactService};
use crate::features::content::{routes as content_routes, services::ContentService};
use crate::features::dashboard::{routes as dashboard_routes, services::DashboardService};
use crate::features::gifs::{routes as gifs_routes, services::GifService};
use crate::features::giphy::{routes as giphy_routes, services::GiphyService};
use crate::features::i18n::{routes as i18n_routes, services::I18nService};
use crate::features::settings::{routes as settings_routes, services::SettingsService};
use crate::features::sitemap::{routes as sitemap_routes, services::SitemapService};
use crate::features::tags::{routes as tags_routes, services::TagService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize auth services
    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(pool.clone(), Arc::clone(&token_service)));
    if let (Some(email), Some(password)) = (
        config.auth.bootstrap_admin_email.as_deref(),
        config.auth.bootstrap_admin_password.as_deref(),
    ) {
        auth_service
            .ensure_bootstrap_admin(email, password)
            .await
            .map_err(|e| anyhow::anyhow!("Bootstrap admin setup failed: {}", e))?;
    }
    tracing::info!("Auth services initialized");

    // Initialize content services
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let tag_service = Arc::new(TagService::new(pool.clone()));
    let gif_service = Arc::new(GifService::new(pool.clone()));
    let contact_service = Arc::new(ContactService::new(pool.clone()));
    let settings_service = Arc::new(SettingsService::new(pool.clone()));
    let content_service = Arc::new(ContentService::new(pool.clone()));
    let dashboard_service = Arc::new(DashboardService::new(pool.clone()));
    let sitemap_service = Arc::new(SitemapService::new(
        pool.clone(),
        config.app.site_url.clone(),
    ));
    tracing::info!("Content services initialized");

    // Seed default UI translation bundles and repair stored ones
    let i18n_service = Arc::new(I18nService::new(pool.clone()));
    i18n_service
        .seed_defaults()
        .await
        .map_err(|e| anyhow::anyhow!("UI translation seeding failed: {}", e))?;
    tracing::info!("UI translation bundles ready");

    // Giphy proxy for the admin GIF picker
    let giphy_service = Arc::new(
        GiphyService::new(config.giphy.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize Giphy client: {}", e))?,
    );
    if config.giphy.api_key.is_none() {
        tracing::warn!("GIPHY_API_KEY not set; Giphy search will return 502");
    }

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(categories_routes::admin_routes(Arc::clone(
            &category_service,
        )))
        .merge(tags_routes::admin_routes(Arc::clone(&tag_service)))
        .merge(gifs_routes::admin_routes(Arc::clone(&gif_service)))
        .merge(contact_routes::admin_routes(Arc::clone(&contact_service)))
        .merge(settings_routes::admin_routes(Arc::clone(&settings_service)))
        .merge(content_routes::admin_routes(Arc::clone(&content_service)))
        .merge(i18n_routes::admin_routes(Arc::clone(&i18n_service)))
        .merge(giphy_routes::admin_routes(giphy_service))
        .merge(dashboard_routes::admin_routes(dashboard_service))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&token_service),
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(categories_routes::routes(category_service))
        .merge(tags_routes::routes(tag_service))
        .merge(gifs_routes::routes(gif_service))
        .merge(contact_routes::routes(contact_service))
        .merge(settings_routes::routes(settings_service))
        .merge(content_routes::routes(content_service))
        .merge(i18n_routes::routes(i18n_service))
        .merge(sitemap_routes::routes(sitemap_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = Router::new().route("/health", get(|| async { StatusCode::OK }));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
    }
}
