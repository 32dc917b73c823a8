use arc_swap::ArcSwap;
use std::sync::Arc;
use warden_dns_application::ports::ClientBindingsPort;
use warden_dns_application::use_cases::{
    AppendToListUseCase, ClearLogsUseCase, CreateListUseCase, DeleteListUseCase,
    GetAnalyticsUseCase, GetListItemsUseCase, GetListsUseCase, GetRecentQueriesUseCase,
    ReloadListsUseCase, RemoveDomainUseCase, ReplaceListUseCase, ValidateSourceUseCase,
};
use warden_dns_domain::BlockingPlan;

#[derive(Clone)]
pub struct AppState {
    pub create_list: Arc<CreateListUseCase>,
    pub append_to_list: Arc<AppendToListUseCase>,
    pub replace_list: Arc<ReplaceListUseCase>,
    pub delete_list: Arc<DeleteListUseCase>,
    pub remove_domain: Arc<RemoveDomainUseCase>,
    pub get_list_items: Arc<GetListItemsUseCase>,
    pub get_lists: Arc<GetListsUseCase>,
    pub reload_lists: Arc<ReloadListsUseCase>,
    pub validate_source: Arc<ValidateSourceUseCase>,
    pub get_analytics: Arc<GetAnalyticsUseCase>,
    pub get_recent_queries: Arc<GetRecentQueriesUseCase>,
    pub clear_logs: Arc<ClearLogsUseCase>,
    pub bindings: Arc<dyn ClientBindingsPort>,
    /// Shared with the DNS handler, which reads it once per query.
    pub blocking: Arc<ArcSwap<BlockingPlan>>,
}
