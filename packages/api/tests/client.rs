//! Integration tests for the transport and resource clients, driven against
//! an in-process axum stub serving the real response envelope.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use api::models::{
    AttachmentQuery, EngineKind, NewStorageEngine, PostListQuery, PostPayload, ProfileUpdate,
    SortOrder, StorageEnginePatch,
};
use api::{ApiClient, Error};

struct ServerGuard(JoinHandle<()>);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Bind an ephemeral localhost port, serve `app` on it, and return a client
/// pointed at it. The server task is aborted when the guard drops.
async fn serve(app: Router) -> (ServerGuard, ApiClient) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind 127.0.0.1:0");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (ServerGuard(handle), ApiClient::new(format!("http://{addr}")))
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "code": 200, "message": null, "data": data }))
}

fn user_json(id: i32, username: &str) -> Value {
    json!({ "id": id, "username": username, "nickname": "Nick", "role": "admin" })
}

#[tokio::test]
async fn bearer_header_follows_the_token() {
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let record = seen.clone();
    let app = Router::new().route(
        "/user/me",
        get(move |headers: HeaderMap| {
            let record = record.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                record.lock().unwrap().push(auth);
                ok(user_json(1, "admin"))
            }
        }),
    );
    let (_guard, client) = serve(app).await;

    let user = client.user().me().await.unwrap();
    assert_eq!(user.username, "admin");

    client.http().set_token(Some("tok-123"));
    client.user().me().await.unwrap();

    client.http().set_token(None);
    client.user().me().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![None, Some("Bearer tok-123".to_string()), None],
    );
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let app = Router::new().route(
        "/user/auth",
        post(|Json(body): Json<Value>| async move {
            ok(json!({
                "token": "tok-1",
                "user": {
                    "id": 7,
                    "username": body["username"],
                    "nickname": "",
                    "role": "admin",
                },
            }))
        }),
    );
    let (_guard, client) = serve(app).await;

    let response = client.user().login("alice", "hunter2").await.unwrap();
    assert_eq!(response.token, "tok-1");
    assert_eq!(response.user.username, "alice");
    assert_eq!(response.user.display_name(), "alice");
}

static UNAUTHORIZED_SEEN: AtomicBool = AtomicBool::new(false);

fn flag_unauthorized() {
    UNAUTHORIZED_SEEN.store(true, Ordering::SeqCst);
}

#[tokio::test]
async fn unauthorized_clears_token_and_fires_hook() {
    let app = Router::new().route(
        "/posts/",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "code": 401, "message": "unauthorized", "data": null })),
            )
        }),
    );
    let (_guard, client) = serve(app).await;

    client.http().set_token(Some("stale-token"));
    client.http().set_unauthorized_hook(flag_unauthorized);

    let err = client
        .posts()
        .list(&PostListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
    assert_eq!(client.http().token(), None);
    assert!(UNAUTHORIZED_SEEN.load(Ordering::SeqCst));
}

#[tokio::test]
async fn post_create_uses_put_and_update_uses_post() {
    let app = Router::new()
        .route(
            "/posts/",
            put(|Json(body): Json<Value>| async move {
                ok(json!({
                    "id": 1,
                    "title": body["title"],
                    "name": body["name"],
                    "content": body["content"],
                    "created_at": "2026-01-01T00:00:00Z",
                    "updated_at": "2026-01-01T00:00:00Z",
                }))
            }),
        )
        .route(
            "/posts/{id}",
            post(|Path(id): Path<i32>, Json(body): Json<Value>| async move {
                ok(json!({
                    "id": id,
                    "title": body["title"],
                    "name": "kept",
                    "content": "kept",
                    "created_at": "2026-01-01T00:00:00Z",
                    "updated_at": "2026-01-02T00:00:00Z",
                }))
            }),
        );
    let (_guard, client) = serve(app).await;

    let created = client
        .posts()
        .create(&PostPayload {
            title: Some("Hello".into()),
            name: Some("hello".into()),
            content: Some("First post".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Hello");

    let updated = client
        .posts()
        .update(
            42,
            &PostPayload {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, 42);
    assert_eq!(updated.title, "Renamed");
}

#[tokio::test]
async fn post_list_passes_pagination_through_and_keeps_order() {
    let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let record = seen.clone();
    let app = Router::new().route(
        "/posts/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let record = record.clone();
            async move {
                *record.lock().unwrap() = Some(params);
                let post = |id: i32, title: &str| {
                    json!({
                        "id": id,
                        "title": title,
                        "name": title.to_lowercase(),
                        "content": "",
                        "created_at": "2026-01-01T00:00:00Z",
                        "updated_at": "2026-01-01T00:00:00Z",
                    })
                };
                ok(json!({
                    "posts": [post(30, "Charlie"), post(10, "Alpha"), post(20, "Bravo")],
                    "total": 23,
                    "page": 2,
                    "page_size": 10,
                    "total_pages": 3,
                }))
            }
        }),
    );
    let (_guard, client) = serve(app).await;

    let list = client
        .posts()
        .list(&PostListQuery {
            page: Some(2),
            page_size: Some(10),
            sort_by: Some("created_at".into()),
            order: Some(SortOrder::Desc),
            ..Default::default()
        })
        .await
        .unwrap();

    let params = seen.lock().unwrap().clone().expect("query recorded");
    let expected: HashMap<String, String> = [
        ("page", "2"),
        ("page_size", "10"),
        ("sort_by", "created_at"),
        ("order", "desc"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(params, expected);

    // Server order is authoritative; nothing gets reordered client-side.
    assert_eq!(list.page, 2);
    let ids: Vec<i32> = list.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[tokio::test]
async fn delete_tolerates_null_data() {
    let app = Router::new().route(
        "/posts/{id}",
        delete(|Path(_id): Path<i32>| async {
            Json(json!({ "code": 200, "message": null, "data": null }))
        }),
    );
    let (_guard, client) = serve(app).await;

    client.posts().delete(5).await.unwrap();
}

#[tokio::test]
async fn error_envelope_surfaces_code_and_message() {
    let app = Router::new().route(
        "/posts/{id}",
        get(|Path(_id): Path<i32>| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "code": 404, "message": "No post found", "data": null })),
            )
        }),
    );
    let (_guard, client) = serve(app).await;

    let err = client.posts().get(999).await.unwrap_err();
    match err {
        Error::Api { code, message } => {
            assert_eq!(code, 404);
            assert_eq!(message, "No post found");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn attachment_upload_sends_multipart_fields() {
    let app = Router::new().route(
        "/attachments/",
        post(|mut multipart: Multipart| async move {
            let mut file_name = None;
            let mut mime = None;
            let mut len = 0;
            let mut engine = None;
            while let Some(field) = multipart.next_field().await.unwrap() {
                match field.name().unwrap_or_default() {
                    "file" => {
                        file_name = field.file_name().map(String::from);
                        mime = field.content_type().map(String::from);
                        len = field.bytes().await.unwrap().len();
                    }
                    "storage_engine_id" => {
                        engine = Some(field.text().await.unwrap());
                    }
                    other => panic!("unexpected multipart field {other}"),
                }
            }
            ok(json!({
                "id": 9,
                "mime": mime,
                "hash": format!("len-{len}"),
                "storage_engine_id": engine.unwrap().parse::<i32>().unwrap(),
                "path": file_name,
                "created_at": "2026-01-01T00:00:00Z",
            }))
        }),
    );
    let (_guard, client) = serve(app).await;

    let attachment = client
        .attachments()
        .upload("logo.png", vec![0u8; 16], Some(2))
        .await
        .unwrap();
    assert_eq!(attachment.mime, "image/png");
    assert_eq!(attachment.hash, "len-16");
    assert_eq!(attachment.storage_engine_id, 2);
    assert_eq!(attachment.path, "logo.png");
}

#[tokio::test]
async fn attachment_list_filters_pass_through() {
    let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let record = seen.clone();
    let app = Router::new().route(
        "/attachments/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let record = record.clone();
            async move {
                *record.lock().unwrap() = Some(params);
                ok(json!({
                    "items": [],
                    "total": 0,
                    "page": 1,
                    "size": 20,
                    "total_pages": 0,
                }))
            }
        }),
    );
    let (_guard, client) = serve(app).await;

    let list = client
        .attachments()
        .list(&AttachmentQuery {
            page: Some(1),
            size: Some(20),
            mime: Some("image/png".into()),
            storage_engine_id: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(list.total, 0);

    let params = seen.lock().unwrap().clone().expect("query recorded");
    assert_eq!(params.get("mime").map(String::as_str), Some("image/png"));
    assert_eq!(params.get("storage_engine_id").map(String::as_str), Some("3"));
    assert!(!params.contains_key("sort"));
}

#[tokio::test]
async fn storage_engine_create_uses_post_and_update_uses_put() {
    let app = Router::new()
        .route(
            "/storage_engines/",
            post(|Json(body): Json<Value>| async move {
                ok(json!({
                    "id": 3,
                    "name": body["name"],
                    "comments": body["comments"],
                    "type": body["type"],
                    "config": body["config"],
                }))
            }),
        )
        .route(
            "/storage_engines/{id}",
            put(|Path(id): Path<i32>, Json(body): Json<Value>| async move {
                ok(json!({
                    "id": id,
                    "name": body["name"],
                    "comments": "kept",
                    "type": "internal",
                    "config": null,
                }))
            }),
        );
    let (_guard, client) = serve(app).await;

    let created = client
        .storage_engines()
        .create(&NewStorageEngine {
            name: "bucket".into(),
            comments: Some("cdn offload".into()),
            kind: EngineKind::S3,
            config: Some(r#"{"bucket":"assets"}"#.into()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.kind, EngineKind::S3);
    assert_eq!(created.config.as_deref(), Some(r#"{"bucket":"assets"}"#));

    let updated = client
        .storage_engines()
        .update(
            3,
            &StorageEnginePatch {
                name: Some("bucket-2".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "bucket-2");
    assert_eq!(updated.kind, EngineKind::Internal);
}

#[tokio::test]
async fn settings_round_trip_and_theme_enumeration() {
    let app = Router::new()
        .route(
            "/settings/",
            get(|| async { ok(json!({ "title": "Bramble", "theme": "default" })) }).post(
                |Json(body): Json<Value>| async move { ok(body) },
            ),
        )
        .route(
            "/settings/themes",
            get(|| async { ok(json!(["default", "paperback"])) }),
        );
    let (_guard, client) = serve(app).await;

    let mut settings = client.settings().get().await.unwrap();
    assert_eq!(
        settings.get("title").and_then(Value::as_str),
        Some("Bramble")
    );

    settings.insert("theme".into(), Value::String("paperback".into()));
    let saved = client.settings().update(&settings).await.unwrap();
    assert_eq!(
        saved.get("theme").and_then(Value::as_str),
        Some("paperback")
    );

    let themes = client.settings().themes().await.unwrap();
    assert_eq!(themes, vec!["default", "paperback"]);
}

#[tokio::test]
async fn profile_update_posts_partial_fields() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let record = seen.clone();
    let app = Router::new().route(
        "/user/me",
        post(move |Json(body): Json<Value>| {
            let record = record.clone();
            async move {
                *record.lock().unwrap() = Some(body);
                ok(user_json(1, "admin"))
            }
        }),
    );
    let (_guard, client) = serve(app).await;

    client
        .user()
        .update_me(&ProfileUpdate {
            nickname: Some("New Nick".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let body = seen.lock().unwrap().clone().expect("body recorded");
    assert_eq!(body, json!({ "nickname": "New Nick" }));
}
