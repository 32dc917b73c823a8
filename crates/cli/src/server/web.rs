use axum::Router;
use std::net::SocketAddr;
use tracing::info;

/// Loopback control plane. The public web UI and its reverse proxy live in
/// front of this and are expected to set the auth headers.
pub async fn run_web_server(bind_addr: String, router: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Control API listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
