pub mod append_to_list;
pub mod create_list;
pub mod delete_list;
pub mod get_list_items;
pub mod get_lists;
pub mod reload_lists;
pub mod remove_domain;
pub mod replace_list;
pub mod validate_source;

pub use append_to_list::AppendToListUseCase;
pub use create_list::CreateListUseCase;
pub use delete_list::DeleteListUseCase;
pub use get_list_items::GetListItemsUseCase;
pub use get_lists::GetListsUseCase;
pub use reload_lists::ReloadListsUseCase;
pub use remove_domain::RemoveDomainUseCase;
pub use replace_list::ReplaceListUseCase;
pub use validate_source::ValidateSourceUseCase;

/// Where a list mutation takes its rules from.
#[derive(Debug, Clone)]
pub enum ListSource {
    Url(String),
    Items(Vec<String>),
}
