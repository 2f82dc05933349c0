use std::net::SocketAddr;
use tracing::info;
use shelf::catalog::controller::build_router;
use shelf::catalog::factory::create_catalog_service;
use shelf::core::controller::AppState;
use shelf::core::domain::Configuration;
use shelf::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());

    let addr: SocketAddr = config.addr.parse()?;
    let catalog = create_catalog_service(&config);
    info!(addr = %addr, library_file = ?config.library_file, store = ?config.store, "starting catalog");

    let app = build_router(AppState::new(config, catalog));

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
