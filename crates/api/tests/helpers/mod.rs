#![allow(dead_code)]

use arc_swap::ArcSwap;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use warden_dns_api::{create_api_routes, AppState};
use warden_dns_application::use_cases::{
    AppendToListUseCase, ClearLogsUseCase, CreateListUseCase, DeleteListUseCase,
    EvaluateQueryUseCase, GetAnalyticsUseCase, GetListItemsUseCase, GetListsUseCase,
    GetRecentQueriesUseCase, ReloadListsUseCase, RemoveDomainUseCase, ReplaceListUseCase,
    ValidateSourceUseCase,
};
use warden_dns_infrastructure::{
    ClientBindings, FileListStore, QueryTelemetry, SqliteDevicePolicy,
};
use warden_dns_domain::{BlockingMode, BlockingPlan, ListsConfig};

pub struct TestApp {
    pub router: Router,
    pub bindings: Arc<ClientBindings>,
    pub store: Arc<FileListStore>,
    pub policy: Arc<SqliteDevicePolicy>,
    pub telemetry: Arc<QueryTelemetry>,
    pub evaluate: Arc<EvaluateQueryUseCase>,
    pub blocking: Arc<ArcSwap<BlockingPlan>>,
    pub dir: tempfile::TempDir,
}

pub async fn build_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = ListsConfig {
        directory: dir.path().join("blocklist").to_string_lossy().into_owned(),
        ..Default::default()
    };
    let store = Arc::new(FileListStore::new(&config).await.unwrap());

    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let policy = Arc::new(SqliteDevicePolicy::new(pool).await.unwrap());

    let telemetry = Arc::new(QueryTelemetry::new(dir.path().join("logs.jsonl"), 500));
    let bindings = Arc::new(ClientBindings::new());

    let evaluate = Arc::new(EvaluateQueryUseCase::new(
        bindings.clone(),
        policy.clone(),
        store.clone(),
        warden_dns_domain::UnknownDevicePolicy::Allow,
    ));

    let blocking = Arc::new(ArcSwap::from_pointee(BlockingPlan {
        mode: BlockingMode::Redirect,
        block_page_ip: Ipv4Addr::LOCALHOST,
    }));

    let state = AppState {
        create_list: Arc::new(CreateListUseCase::new(store.clone(), policy.clone())),
        append_to_list: Arc::new(AppendToListUseCase::new(store.clone())),
        replace_list: Arc::new(ReplaceListUseCase::new(store.clone())),
        delete_list: Arc::new(DeleteListUseCase::new(store.clone(), policy.clone())),
        remove_domain: Arc::new(RemoveDomainUseCase::new(store.clone())),
        get_list_items: Arc::new(GetListItemsUseCase::new(store.clone())),
        get_lists: Arc::new(GetListsUseCase::new(store.clone(), policy.clone())),
        reload_lists: Arc::new(ReloadListsUseCase::new(store.clone())),
        validate_source: Arc::new(ValidateSourceUseCase::new(store.clone())),
        get_analytics: Arc::new(GetAnalyticsUseCase::new(telemetry.clone())),
        get_recent_queries: Arc::new(GetRecentQueriesUseCase::new(telemetry.clone())),
        clear_logs: Arc::new(ClearLogsUseCase::new(telemetry.clone())),
        bindings: bindings.clone(),
        blocking: blocking.clone(),
    };

    TestApp {
        router: create_api_routes(state),
        bindings,
        store,
        policy,
        telemetry,
        evaluate,
        blocking,
        dir,
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Serve `body` for a single HTTP request and return a URL pointing at it.
pub async fn serve_http_once(body: String, status: u16) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status} OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    format!("http://{addr}/lists/remote-list.txt")
}
