use clap::Parser;
use dotenv::dotenv;
use social_graph_server::{
    app,
    config::Config,
    db,
    graphql::{get_schema, schema_builder},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the environment may be set already.
    dotenv().ok();
    env_logger::init();

    let config = Config::parse();

    if config.print_schema {
        println!("{}", schema_builder(&config.limits).finish().sdl());
        return Ok(());
    }

    let db = db::connect(&config.database_url, config.max_connections).await?;
    let schema = get_schema(db.clone(), &config.limits);

    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    log::info!("Serving on http://{address}");
    axum::serve(listener, app(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
