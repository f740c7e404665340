use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use dish_recommender::config::Settings;
use dish_recommender::routes::{self, AppState};
use dish_recommender::{DishCatalog, Recommender};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load_for_startup()?;

    // Initialize logging (RUST_LOG wins over the configured level)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting dish recommender service...");

    // The service is useless without its catalog, so a load failure is fatal
    let catalog = DishCatalog::from_path(&settings.catalog.path, &settings.catalog.load_options())
        .map_err(|e| {
            error!("Failed to load dataset from {}: {}", settings.catalog.path, e);
            std::io::Error::other(format!("dataset load failed: {}", e))
        })?;

    info!("Catalog ready with {} unique dishes", catalog.len());

    let params = settings.selection.params();
    let recommender = Recommender::new(Arc::new(catalog), params);

    info!("Recommender initialized with params: {:?}", params);

    let app_state = AppState { recommender };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let development = settings.server.development;

    if development {
        info!("Development mode: adding Content-Security-Policy header");
    }

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(routes::security_headers(development))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
