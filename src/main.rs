mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    if !config.index_file().is_file() {
        tracing::warn!(site_dir = %config.site_dir.display(), "index.html not found, build the client first");
    }

    let app = routes::app(&config);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, site_dir = %config.site_dir.display(), "eventboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
