use serde::{Deserialize, Serialize};

/// `items` may arrive as a single string or an array of strings; both are
/// split on commas, whitespace and newlines downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemsField {
    One(String),
    Many(Vec<String>),
}

impl ItemsField {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ItemsField::One(item) => vec![item],
            ItemsField::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub items: Option<ItemsField>,
}

#[derive(Debug, Deserialize)]
pub struct AppendListRequest {
    pub url: Option<String>,
    pub items: Option<ItemsField>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceListRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveDomainRequest {
    pub domain: String,
}

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct ListItemsResponse {
    pub total: usize,
    pub items: Vec<String>,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub count: usize,
    pub sample: Vec<String>,
}
