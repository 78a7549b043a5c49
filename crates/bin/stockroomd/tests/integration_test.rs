//! End-to-end smoke tests for the full stockroomd stack.
//!
//! Each test spins up the complete application (JSON file store in a temp
//! directory, real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use stockroom_adapter_http_axum::router;
use stockroom_adapter_http_axum::state::AppState;
use stockroom_adapter_storage_json::Config;
use stockroom_app::services::item_service::ItemService;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: axum::Router,
    data_file: PathBuf,
    _dir: TempDir,
}

/// Build a fully-wired router backed by a JSON file inside a fresh temp dir.
async fn app() -> TestApp {
    app_with(|_| {}).await
}

async fn app_with(seed: impl FnOnce(&Path)) -> TestApp {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let data_file = dir.path().join("data").join("items.json");
    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("script.js"), "// front end").unwrap();

    let store = Config {
        data_file: data_file.clone(),
        strict_reads: false,
    }
    .build()
    .await
    .expect("json store should initialise");
    seed(&data_file);

    let router = router::build(AppState::new(ItemService::new(store)), &static_dir);
    TestApp {
        router,
        data_file,
        _dir: dir,
    }
}

impl TestApp {
    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn stored(&self) -> Value {
        serde_json::from_str(&std::fs::read_to_string(&self.data_file).unwrap()).unwrap()
    }
}

// ---------------------------------------------------------------------------
// Front end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_render_index_page() {
    let app = app().await;
    let resp = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(resp.into_body().collect().await.unwrap().to_bytes().to_vec())
        .unwrap();
    assert!(body.contains("Stockroom"));
}

#[tokio::test]
async fn should_serve_static_script() {
    let app = app().await;
    let resp = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/script.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"// front end");
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_initialize_backing_file_on_first_list() {
    let app = app().await;
    assert!(!app.data_file.exists());

    let (status, body) = app.call("GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert_eq!(app.stored(), json!([]));
}

#[tokio::test]
async fn should_complete_item_crud_cycle() {
    let app = app().await;

    // Create
    let (status, body) = app
        .call("POST", "/items", Some(json!({"name": "Widget"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Widget"}));

    // Get
    let (status, body) = app.call("GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Widget");

    // Missing id
    let (status, body) = app.call("GET", "/items/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    // Update
    let (status, body) = app
        .call("PUT", "/items/1", Some(json!({"name": "Gadget", "qty": 2})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Gadget", "qty": 2}));
    assert_eq!(app.stored(), json!([{"id": 1, "name": "Gadget", "qty": 2}]));

    // Delete
    let (status, body) = app.call("DELETE", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"], json!({"id": 1, "name": "Gadget", "qty": 2}));
    assert!(body["message"].is_string());

    let (status, _) = app.call("GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.call("DELETE", "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.stored(), json!([]));
}

#[tokio::test]
async fn should_drop_fields_missing_from_update_body() {
    let app = app_with(|path| {
        std::fs::write(path, r#"[{"id": 1, "name": "A", "qty": 5}]"#).unwrap();
    })
    .await;

    let (status, _) = app.call("PUT", "/items/1", Some(json!({"name": "B"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.stored(), json!([{"id": 1, "name": "B"}]));
}

#[tokio::test]
async fn should_assign_max_plus_one_over_existing_ids() {
    let app = app_with(|path| {
        std::fs::write(path, r#"[{"id": 1}, {"id": 3}]"#).unwrap();
    })
    .await;

    let (status, body) = app.call("POST", "/items", Some(json!({"name": "New"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4);
    assert_eq!(
        app.stored(),
        json!([{"id": 1}, {"id": 3}, {"id": 4, "name": "New"}])
    );
}

#[tokio::test]
async fn should_preserve_stored_entries_without_integer_id() {
    let app = app_with(|path| {
        std::fs::write(path, r#"[{"id": 1, "name": "keep me"}, {"name": "no id"}]"#).unwrap();
    })
    .await;

    let (status, body) = app.call("POST", "/items", Some(json!({"name": "New"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
    assert_eq!(
        app.stored(),
        json!([
            {"id": 1, "name": "keep me"},
            {"name": "no id"},
            {"id": 2, "name": "New"}
        ])
    );
}

#[tokio::test]
async fn should_refuse_create_without_touching_file_when_ids_are_exhausted() {
    let seeded = format!(r#"[{{"id": {}, "name": "last"}}]"#, u64::MAX);
    let app = app_with(|path| std::fs::write(path, &seeded).unwrap()).await;

    let (status, _) = app.call("POST", "/items", Some(json!({"name": "next"}))).await;
    assert!(status.is_server_error());
    assert_eq!(app.stored(), json!([{"id": u64::MAX, "name": "last"}]));
}

#[tokio::test]
async fn should_store_large_numbers_exactly_as_sent() {
    let app = app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"sku":123456789012345678901234567890}"#))
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let text = std::fs::read_to_string(&app.data_file).unwrap();
    assert!(text.contains("123456789012345678901234567890"), "{text}");
    assert!(!text.contains("e29"), "{text}");
}

#[tokio::test]
async fn should_assign_sequential_ids_from_empty_store() {
    let app = app().await;
    for expected in 1..=4 {
        let (status, body) = app
            .call("POST", "/items", Some(json!({"n": expected})))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], expected);
    }
    let (_, all) = app.call("GET", "/items", None).await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn should_reject_non_object_bodies() {
    let app = app().await;
    let (status, _) = app
        .call("POST", "/items", Some(json!("not an object")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.call("POST", "/items", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_serve_empty_collection_when_backing_file_is_corrupt() {
    let app = app_with(|path| {
        std::fs::write(path, "not json at all").unwrap();
    })
    .await;

    let (status, body) = app.call("GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
