// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode, header::LOCATION};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;
use support::{TestApp, assert_error, get_request, json_request, read_json};

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;
    let resp = app.router().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_then_fetch_article() {
    let app = TestApp::new().await;
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/articles",
            json!({ "title": "Hi", "content": "body", "writer": "amy", "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = read_json(resp).await["id"].as_i64().unwrap();

    let resp = router
        .oneshot(get_request(&format!("/articles/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["title"], "Hi");
    assert_eq!(body["content"], "body");
    assert_eq!(body["writer"], "amy");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn listing_is_items_count_pair() {
    let app = TestApp::new().await;
    for n in 1..=3 {
        app.create_article(&format!("post {n}"), "amy", "pw").await;
    }

    let resp = app
        .router()
        .oneshot(get_request("/articles?page=1&limit=2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let items = body[0].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "post 3");
    assert!(items[0].get("content").is_none());
    assert_eq!(body[1], 2);
}

#[tokio::test]
async fn listing_filters_by_type_and_keyword() {
    let app = TestApp::new().await;
    app.create_article("Rust tips", "amy", "pw").await;
    app.create_article("Go tips", "bob", "pw").await;

    let resp = app
        .router()
        .oneshot(get_request("/articles?type=writer&keyword=BO"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body[1], 1);
    assert_eq!(body[0][0]["writer"], "bob");
}

#[tokio::test]
async fn unknown_search_type_is_bad_request() {
    let app = TestApp::new().await;
    let resp = app
        .router()
        .oneshot(get_request("/articles?type=content&keyword=x"))
        .await
        .unwrap();
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn empty_page_is_not_found() {
    let app = TestApp::new().await;
    let resp = app.router().oneshot(get_request("/articles")).await.unwrap();
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn missing_article_is_not_found() {
    let app = TestApp::new().await;
    let resp = app
        .router()
        .oneshot(get_request("/articles/12345"))
        .await
        .unwrap();
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;
    let resp = app
        .router()
        .oneshot(get_request("/articles/abc"))
        .await
        .unwrap();
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn patch_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let id = app.create_article("Hi", "amy", "pw").await;

    let resp = app
        .router()
        .oneshot(json_request(
            "PATCH",
            &format!("/articles/{id}"),
            json!({ "title": "Hacked", "password": "guess" }),
        ))
        .await
        .unwrap();
    assert_error(resp, StatusCode::UNAUTHORIZED).await;
}

#[tokio::test]
async fn patch_and_delete_with_password() {
    let app = TestApp::new().await;
    let id = app.create_article("Hi", "amy", "pw").await;
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/articles/{id}"),
            json!({ "content": "edited", "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "affected": 1 }));

    let resp = router
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/articles/{id}"),
            json!({ "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "affected": 1 }));

    let resp = router
        .oneshot(get_request(&format!("/articles/{id}")))
        .await
        .unwrap();
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = TestApp::new().await;
    let resp = app
        .router()
        .oneshot(json_request("POST", "/articles", json!({ "title": "only" })))
        .await
        .unwrap();
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn replies_create_and_list() {
    let app = TestApp::new().await;
    let article = app.create_article("Hi", "amy", "pw").await;
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/articles/{article}/replies"),
            json!({ "content": "first!" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["article_id"], article);
    let root = created["id"].as_i64().unwrap();

    let resp = router
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/articles/{article}/replies"),
            json!({ "content": "second", "reply_ref": root }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = router
        .oneshot(get_request(&format!("/articles/{article}/replies")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body[1], 2);
    assert_eq!(body[0][0]["content"], "second");
    assert_eq!(body[0][0]["reply_ref"], root);
}

#[tokio::test]
async fn reply_on_missing_article_is_bad_request() {
    let app = TestApp::new().await;
    let resp = app
        .router()
        .oneshot(json_request(
            "POST",
            "/articles/77/replies",
            json!({ "content": "hello?" }),
        ))
        .await
        .unwrap();
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn root_redirects_to_docs() {
    let app = TestApp::new().await;
    let resp = app
        .router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/docs");
}
