pub mod dns;
pub mod lists;
pub mod telemetry;

pub use dns::{EvaluateQueryUseCase, QueryVerdict};
pub use lists::{
    AppendToListUseCase, CreateListUseCase, DeleteListUseCase, GetListItemsUseCase,
    GetListsUseCase, ListSource, ReloadListsUseCase, RemoveDomainUseCase, ReplaceListUseCase,
    ValidateSourceUseCase,
};
pub use telemetry::{ClearLogsUseCase, GetAnalyticsUseCase, GetRecentQueriesUseCase};
