use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use warden_dns_api::create_api_routes;
use warden_dns_application::ports::TelemetrySink;
use warden_dns_infrastructure::dns::run_udp_server;
use warden_dns_jobs::{BindingSweepJob, JobRunner, ListResyncJob};
use warden_dns_domain::CliOverrides;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "warden-dns")]
#[command(version)]
#[command(about = "Per-device DNS filtering resolver with a loopback control plane")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS bind address (e.g. 0.0.0.0:53)
    #[arg(long)]
    dns_bind: Option<String>,

    /// Control API bind address (e.g. 127.0.0.1:8081)
    #[arg(long)]
    http_bind: Option<String>,

    /// Upstream resolver (host:port)
    #[arg(long)]
    upstream: Option<String>,

    /// Blocklist directory
    #[arg(long)]
    list_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_bind: cli.dns_bind.clone(),
        http_bind: cli.http_bind.clone(),
        upstream: cli.upstream.clone(),
        list_dir: cli.list_dir.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting warden-dns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::build(config.clone()).await?;

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new()
        .with_binding_sweep(BindingSweepJob::new(
            services.bindings.clone(),
            config.policy.binding_ttl_secs,
        ))
        .with_shutdown_token(shutdown.clone());
    if let Some(secs) = config.lists.resync_interval_secs {
        runner = runner.with_list_resync(
            ListResyncJob::new(services.store.clone()).with_interval(Duration::from_secs(secs)),
        );
    }
    runner.start().await;

    let dns_bind: SocketAddr = config.server.dns_bind.parse()?;
    let handler = Arc::new(services.query_handler());
    let telemetry: Arc<dyn TelemetrySink> = services.telemetry.clone();
    let dns_task = tokio::spawn(run_udp_server(dns_bind, handler, telemetry));

    let router = create_api_routes(services.app_state());
    let web_task = tokio::spawn(server::run_web_server(
        config.server.http_bind.clone(),
        router,
    ));

    tokio::select! {
        result = dns_task => {
            shutdown.cancel();
            result??;
            anyhow::bail!("DNS server exited unexpectedly");
        }
        result = web_task => {
            shutdown.cancel();
            result??;
            anyhow::bail!("Control API exited unexpectedly");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            shutdown.cancel();
        }
    }

    Ok(())
}
