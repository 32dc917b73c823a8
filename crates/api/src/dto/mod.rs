pub mod config;
pub mod lists;
pub mod logs;

pub use config::UpdateBlockingRequest;
pub use lists::{
    AppendListRequest, CreateListRequest, ItemsField, ListItemsQuery, ListItemsResponse,
    RemoveDomainRequest, ReplaceListRequest, ValidateRequest, ValidateResponse,
};
pub use logs::LogsQuery;
