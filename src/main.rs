use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use portfolio_site::SiteConfig;
use portfolio_site::handlers;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = SiteConfig::from_env();

    let store = config
        .store
        .connect()
        .await
        .expect("Failed to initialize record store");
    let store_data = web::Data::new(store);
    tracing::info!("Record store ready ({})", config.store.kind());

    let settings_data = web::Data::new(config.settings.clone());
    let static_dir = config.static_dir.clone();

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(handlers::error_handlers())
            .app_data(store_data.clone())
            .app_data(settings_data.clone())
            .service(Files::new("/static", &static_dir))
            .configure(handlers::init_routes)
            .default_service(web::to(handlers::pages::fallback))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
