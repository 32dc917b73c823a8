use crate::bootstrap;
use arc_swap::ArcSwap;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use warden_dns_api::AppState;
use warden_dns_application::ports::DevicePolicyPort;
use warden_dns_application::use_cases::{
    AppendToListUseCase, ClearLogsUseCase, CreateListUseCase, DeleteListUseCase,
    EvaluateQueryUseCase, GetAnalyticsUseCase, GetListItemsUseCase, GetListsUseCase,
    GetRecentQueriesUseCase, ReloadListsUseCase, RemoveDomainUseCase, ReplaceListUseCase,
    ValidateSourceUseCase,
};
use warden_dns_infrastructure::{
    detect_local_ipv4, ClientBindings, FileListStore, QueryHandler, QueryTelemetry,
    SqliteDevicePolicy, StaticDevicePolicy, UdpForwarder,
};
use warden_dns_domain::{BlockingMode, BlockingPlan, Config};

/// Everything the servers and jobs share, wired once at startup.
pub struct Services {
    pub config: Config,
    pub store: Arc<FileListStore>,
    pub bindings: Arc<ClientBindings>,
    pub telemetry: Arc<QueryTelemetry>,
    pub policy: Arc<dyn DevicePolicyPort>,
    pub evaluate: Arc<EvaluateQueryUseCase>,
    /// Shared between the control plane (writer) and the DNS handler
    /// (per-query reader).
    pub blocking: Arc<ArcSwap<BlockingPlan>>,
    upstream: SocketAddr,
}

impl Services {
    pub async fn build(config: Config) -> anyhow::Result<Services> {
        // A failed initial load (unreadable directory) is fatal.
        let store = Arc::new(FileListStore::new(&config.lists).await?);

        let policy: Arc<dyn DevicePolicyPort> = match &config.policy.database {
            Some(path) => {
                let pool = bootstrap::init_policy_database(path).await?;
                Arc::new(SqliteDevicePolicy::new(pool).await?)
            }
            None => {
                info!("No policy database configured; running without per-device lists");
                Arc::new(StaticDevicePolicy)
            }
        };

        let bindings = Arc::new(ClientBindings::new());
        let log_path = Path::new(&config.lists.directory).join("logs.jsonl");
        let telemetry = Arc::new(QueryTelemetry::new(log_path, config.telemetry.recent_cap));

        let evaluate = Arc::new(EvaluateQueryUseCase::new(
            bindings.clone(),
            policy.clone(),
            store.clone(),
            config.blocking.unknown_device_policy,
        ));

        let upstream: SocketAddr = config.upstream.server.parse()?;
        let blocking = Arc::new(ArcSwap::from_pointee(BlockingPlan {
            mode: config.blocking.mode,
            block_page_ip: resolve_block_page_ip(&config, upstream),
        }));

        Ok(Services {
            config,
            store,
            bindings,
            telemetry,
            policy,
            evaluate,
            blocking,
            upstream,
        })
    }

    pub fn query_handler(&self) -> QueryHandler {
        let forwarder = UdpForwarder::new(self.upstream, self.config.upstream.timeout());
        QueryHandler::new(self.evaluate.clone(), forwarder, self.blocking.clone())
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            create_list: Arc::new(CreateListUseCase::new(
                self.store.clone(),
                self.policy.clone(),
            )),
            append_to_list: Arc::new(AppendToListUseCase::new(self.store.clone())),
            replace_list: Arc::new(ReplaceListUseCase::new(self.store.clone())),
            delete_list: Arc::new(DeleteListUseCase::new(
                self.store.clone(),
                self.policy.clone(),
            )),
            remove_domain: Arc::new(RemoveDomainUseCase::new(self.store.clone())),
            get_list_items: Arc::new(GetListItemsUseCase::new(self.store.clone())),
            get_lists: Arc::new(GetListsUseCase::new(self.store.clone(), self.policy.clone())),
            reload_lists: Arc::new(ReloadListsUseCase::new(self.store.clone())),
            validate_source: Arc::new(ValidateSourceUseCase::new(self.store.clone())),
            get_analytics: Arc::new(GetAnalyticsUseCase::new(self.telemetry.clone())),
            get_recent_queries: Arc::new(GetRecentQueriesUseCase::new(self.telemetry.clone())),
            clear_logs: Arc::new(ClearLogsUseCase::new(self.telemetry.clone())),
            bindings: self.bindings.clone(),
            blocking: self.blocking.clone(),
        }
    }
}

/// In redirect mode without an explicit target, point blocked clients at the
/// address they can actually reach us on; loopback as a last resort.
fn resolve_block_page_ip(config: &Config, upstream: SocketAddr) -> Ipv4Addr {
    if let Some(ip) = config.blocking.block_page_ip {
        return ip;
    }
    if config.blocking.mode != BlockingMode::Redirect {
        return Ipv4Addr::LOCALHOST;
    }
    match detect_local_ipv4(upstream) {
        Some(ip) => {
            info!(address = %ip, "Detected local address for block page");
            ip
        }
        None => {
            warn!("Could not detect a local address for the block page; using loopback");
            Ipv4Addr::LOCALHOST
        }
    }
}
