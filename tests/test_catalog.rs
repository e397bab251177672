mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn write_catalog(app: &TestApp, files: &[(&str, &str)]) {
    let dir = app.catalog_dir();
    std::fs::create_dir_all(&dir).unwrap();
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents).unwrap();
    }
}

#[tokio::test]
async fn test_missing_directory_is_empty_catalog() {
    let app = TestApp::new();
    let (status, body) = app.json("GET", "/api/catalog/images", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "images": [], "total": 0 }));
}

#[tokio::test]
async fn test_empty_directory_is_empty_catalog() {
    let app = TestApp::new();
    write_catalog(&app, &[]);
    let (status, body) = app.json("GET", "/api/catalog/images", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "images": [], "total": 0 }));
}

#[tokio::test]
async fn test_listing_is_sorted_by_filename() {
    let app = TestApp::new();
    write_catalog(
        &app,
        &[
            ("03_ornaments.png", "c"),
            ("01_cover.png", "a"),
            ("02_lights.png", "b"),
            ("notes.txt", "skip"),
            (".04_hidden.png", "skip"),
        ],
    );

    let (status, body) = app.json("GET", "/api/catalog/images", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "images": [
                { "id": 1, "filename": "01_cover.png", "url": "/static/catalog/01_cover.png" },
                { "id": 2, "filename": "02_lights.png", "url": "/static/catalog/02_lights.png" },
                { "id": 3, "filename": "03_ornaments.png", "url": "/static/catalog/03_ornaments.png" },
            ],
            "total": 3,
        })
    );

    let (_, again) = app.json("GET", "/api/catalog/images", None).await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_serve_catalog_image() {
    let app = TestApp::new();
    write_catalog(&app, &[("01_cover.png", "not really a png")]);

    let (status, bytes) = app
        .request("GET", "/api/static/catalog/01_cover.png", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"not really a png");

    // the listing url resolves through the static mount
    let (status, bytes) = app.request("GET", "/static/catalog/01_cover.png", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"not really a png");
}

#[tokio::test]
async fn test_serve_missing_image_is_not_found() {
    let app = TestApp::new();
    write_catalog(&app, &[("01_cover.png", "a")]);

    let (status, body) = app
        .json("GET", "/api/static/catalog/99_missing.png", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Image not found");

    let (status, _) = app
        .json("GET", "/api/static/catalog/..%2F..%2Fetc%2Fpasswd", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinked_images_are_listed() {
    let app = TestApp::new();
    write_catalog(&app, &[("01_cover.png", "a")]);

    let source = app.static_dir.join("shared.png");
    std::fs::write(&source, "b").unwrap();
    std::os::unix::fs::symlink(&source, app.catalog_dir().join("02_linked.png")).unwrap();
    std::os::unix::fs::symlink(
        app.static_dir.join("missing.png"),
        app.catalog_dir().join("03_dangling.png"),
    )
    .unwrap();

    let (status, body) = app.json("GET", "/api/catalog/images", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["images"][1]["filename"], "02_linked.png");
    assert_eq!(body["images"][1]["id"], 2);
}
