use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use base64::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;
use videogen_common::ModelType;
use videogen_server::device::DeviceInfo;
use videogen_server::engine::http::HttpEngine;
use videogen_server::engine::EngineRegistry;
use videogen_server::state::AppState;

// Smallest byte stream that still parses as MP4: an `ftyp` box followed by
// an `mdat` box with a few payload bytes.
const TEST_VIDEO: &[u8] = &[
    0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm', 0x00, 0x00, 0x02,
    0x00, b'i', b's', b'o', b'm', b'i', b's', b'o', b'2', 0x00, 0x00, 0x00, 0x10, b'm', b'd',
    b'a', b't', 0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03,
];

fn app_for(worker_url: &str) -> Router {
    let state = AppState {
        engines: Arc::new(EngineRegistry::with_engines(
            Arc::new(HttpEngine::new(
                ModelType::Photorealistic,
                format!("{worker_url}/mochi"),
            )),
            Arc::new(HttpEngine::new(
                ModelType::Creative,
                format!("{worker_url}/cogvideo"),
            )),
            Arc::new(HttpEngine::new(
                ModelType::Animation,
                format!("{worker_url}/animatediff"),
            )),
        )),
        device: DeviceInfo {
            device: "cpu",
            cuda_available: false,
        },
    };
    videogen_server::app(state)
}

async fn post_json(router: Router, path: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    router.oneshot(request).await.unwrap()
}

async fn get(router: Router, path: &str) -> Response {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_all_models_unloaded() {
    let router = app_for("http://127.0.0.1:9");

    let response = get(router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "online");
    assert_eq!(body["service"], "mythiq-video-creator");
    assert_eq!(body["device"], "cpu");
    assert_eq!(body["cuda_available"], false);
    assert_eq!(
        body["models_loaded"],
        json!({"mochi": false, "cogvideo": false, "animatediff": false})
    );
}

#[tokio::test]
async fn video_models_lists_all_three() {
    let router = app_for("http://127.0.0.1:9");

    let response = get(router, "/video-models").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["auto_detection"], true);
    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 3);
    let ids: Vec<_> = models.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["mochi", "cogvideo", "animatediff"]);
    let animatediff = &models[2];
    assert_eq!(animatediff["max_duration_seconds"], 2);
}

#[tokio::test]
async fn preview_recommends_without_generating() {
    let mut server = mockito::Server::new_async().await;
    let generate = server
        .mock("POST", "/animatediff/generate")
        .expect(0)
        .create_async()
        .await;
    let router = app_for(&server.url());

    let response = post_json(
        router,
        "/generate-video-preview",
        json!({"prompt": "A cute cartoon cat playing with a ball of yarn"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["recommended_model"], "animation");
    assert_eq!(body["model_name"], "AnimateDiff");
    assert_eq!(body["max_duration_seconds"], 2);
    assert!(body["reason"].as_str().unwrap().contains("cartoon"));

    generate.assert_async().await;
}

#[tokio::test]
async fn explicit_model_is_echoed_and_video_round_trips() {
    let mut server = mockito::Server::new_async().await;
    let warmup = server
        .mock("POST", "/animatediff/warmup")
        .with_status(200)
        .create_async()
        .await;
    let generate = server
        .mock("POST", "/animatediff/generate")
        .with_status(200)
        .with_header("content-type", "video/mp4")
        .with_body(TEST_VIDEO)
        .create_async()
        .await;
    let router = app_for(&server.url());

    let response = post_json(
        router,
        "/generate-video",
        json!({"prompt": "a dancing robot", "duration": 2, "model_type": "animation"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["model_used"], "animation");
    assert_eq!(body["duration"], 2);
    assert_eq!(body["prompt"], "a dancing robot");
    assert!(!body["operation_id"].as_str().unwrap().is_empty());

    let video_data = body["video_data"].as_str().unwrap();
    let payload = video_data
        .strip_prefix("data:video/mp4;base64,")
        .expect("video_data must be a data URL");
    let decoded = BASE64_STANDARD.decode(payload).unwrap();
    assert_eq!(decoded, TEST_VIDEO);
    assert_eq!(&decoded[4..8], b"ftyp");

    warmup.assert_async().await;
    generate.assert_async().await;
}

#[tokio::test]
async fn auto_routes_cartoon_prompt_to_animatediff() {
    let mut server = mockito::Server::new_async().await;
    let warmup = server
        .mock("POST", "/animatediff/warmup")
        .with_status(200)
        .create_async()
        .await;
    let generate = server
        .mock("POST", "/animatediff/generate")
        .with_status(200)
        .with_body(TEST_VIDEO)
        .create_async()
        .await;
    let router = app_for(&server.url());

    let response = post_json(
        router,
        "/generate-video",
        json!({"prompt": "a cartoon dog chasing a ball", "duration": 2, "model_type": "auto"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["model_used"], "animation");

    warmup.assert_async().await;
    generate.assert_async().await;
}

#[tokio::test]
async fn over_cap_duration_is_rejected_with_the_cap() {
    let router = app_for("http://127.0.0.1:9");

    let response = post_json(
        router,
        "/generate-video",
        json!({"prompt": "a cartoon dog", "duration": 6, "model_type": "animation"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    let message = body["error"]["InvalidInput"].as_str().unwrap();
    assert!(message.contains("2 second"));
}

#[tokio::test]
async fn empty_prompt_is_rejected() {
    let router = app_for("http://127.0.0.1:9");

    let response = post_json(router.clone(), "/generate-video", json!({"prompt": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing prompt behaves the same as an empty one.
    let response = post_json(router, "/generate-video", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn worker_failure_surfaces_as_error_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _warmup = server
        .mock("POST", "/mochi/warmup")
        .with_status(200)
        .create_async()
        .await;
    let _generate = server
        .mock("POST", "/mochi/generate")
        .with_status(500)
        .with_body("CUDA out of memory")
        .create_async()
        .await;
    let router = app_for(&server.url());

    let response = post_json(
        router,
        "/generate-video",
        json!({"prompt": "a red ball", "duration": 6, "model_type": "photorealistic"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    let message = body["error"]["GenerationError"].as_str().unwrap();
    assert!(message.contains("CUDA out of memory"));
}

#[tokio::test]
async fn model_loads_once_and_health_tracks_it() {
    let mut server = mockito::Server::new_async().await;
    let warmup = server
        .mock("POST", "/animatediff/warmup")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let generate = server
        .mock("POST", "/animatediff/generate")
        .with_status(200)
        .with_body(TEST_VIDEO)
        .expect(2)
        .create_async()
        .await;
    let router = app_for(&server.url());

    for _ in 0..2 {
        let response = post_json(
            router.clone(),
            "/generate-video",
            json!({"prompt": "a cartoon dog", "duration": 2, "model_type": "animation"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(router, "/health").await;
    let body = body_json(response).await;
    assert_eq!(
        body["models_loaded"],
        json!({"mochi": false, "cogvideo": false, "animatediff": true})
    );

    warmup.assert_async().await;
    generate.assert_async().await;
}
