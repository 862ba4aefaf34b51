use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn site_root_with_asset(tag: &str) -> std::path::PathBuf {
    let root = std::env::temp_dir().join(format!("circula-routes-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::write(root.join("pkg").join("circula.js"), "export {};").unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let root = site_root_with_asset("healthz");
    let resp = static_routes(&root, "pkg")
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_compiled_assets() {
    let root = site_root_with_asset("pkg");
    let resp = static_routes(&root, "pkg")
        .oneshot(Request::builder().uri("/pkg/circula.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"export {};");
}

#[tokio::test]
async fn pkg_missing_asset_is_not_found() {
    let root = site_root_with_asset("missing");
    let resp = static_routes(&root, "pkg")
        .oneshot(Request::builder().uri("/pkg/nope.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
