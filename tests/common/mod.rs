#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use fs_gateway::protocol::build_router;
use fs_gateway::storage::PathGateway;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

/// Builds the following tree and a router serving it:
///
/// root/
///     rootFile.txt
///     .hiddenRootFile.txt
///     subdir1/
///         subdir1File.txt
///         subdir2/
///             subdir2File.txt
pub fn setup() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(&root.join("rootFile.txt"), "rootFile");
    write_file(&root.join(".hiddenRootFile.txt"), "hiddenRootFile");
    fs::create_dir(root.join("subdir1")).unwrap();
    write_file(&root.join("subdir1/subdir1File.txt"), "subdir1File");
    fs::create_dir(root.join("subdir1/subdir2")).unwrap();
    write_file(&root.join("subdir1/subdir2/subdir2File.txt"), "subdir2File");

    let router = build_router(PathGateway::new(root));
    (dir, router)
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(router, request).await
}

pub async fn send_request(
    router: &Router,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, value)
}

pub async fn get(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let uri = if path.is_empty() {
        "/".to_string()
    } else {
        format!("/?path={}", path)
    };
    send(router, "GET", &uri, None).await
}

/// Name of the user owning `path`, resolved the same way listings do
#[cfg(unix)]
pub fn owner_of(path: &Path) -> String {
    use std::os::unix::fs::MetadataExt;

    let uid = fs::metadata(path).unwrap().uid();
    nix::unistd::User::from_uid(nix::unistd::Uid::from_raw(uid))
        .unwrap()
        .map(|u| u.name)
        .unwrap_or_else(|| uid.to_string())
}
