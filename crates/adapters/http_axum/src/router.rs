//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homecat_app::ports::Registry;
use homecat_domain::device::Device;
use homecat_domain::house::House;
use homecat_domain::room::Room;
use homecat_domain::user::User;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the resource routes at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, DR, RR, HR>(state: AppState<UR, DR, RR, HR>) -> Router
where
    UR: Registry<User> + Send + Sync + 'static,
    DR: Registry<Device> + Send + Sync + 'static,
    RR: Registry<Room> + Send + Sync + 'static,
    HR: Registry<House> + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use homecat_adapter_storage_memory::{
        DeviceRegistry, HouseRegistry, RoomRegistry, UserRegistry,
    };
    use homecat_app::services::CatalogService;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build(AppState::new(
            CatalogService::new(UserRegistry::new()),
            CatalogService::new(DeviceRegistry::new()),
            CatalogService::new(RoomRegistry::new()),
            CatalogService::new(HouseRegistry::new()),
        ))
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(empty_request("GET", "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_user() {
        let (status, body) = send(&app(), empty_request("GET", "/users/nobody")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_with_bad_request() {
        let app = app();
        let device = json!({"id": "lamp", "name": "Lamp", "type": "Light", "room_id": "r1"});

        let (status, _) = send(&app, json_request("POST", "/devices", &device)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, json_request("POST", "/devices", &device)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Device already exists");
    }

    #[tokio::test]
    async fn should_reject_invalid_phone_number_with_bad_request() {
        let user = json!({"name": "John Doe", "phone_number": "123", "email": "john@gmail.com"});

        let (status, body) = send(&app(), json_request("POST", "/users", &user)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "phone_number must be exactly 10 digits");
    }

    #[tokio::test]
    async fn should_reject_non_positive_room_size() {
        let room = json!({"name": "Closet", "type": "Storage", "size": 0, "house_id": "h1"});

        let (status, _) = send(&app(), json_request("POST", "/rooms", &room)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_house() {
        let house = json!({"name": "Cabin", "address": "Forest Rd"});

        let (status, body) = send(&app(), json_request("PUT", "/houses/missing", &house)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "House not found");
    }

    #[tokio::test]
    async fn should_acknowledge_room_deletion() {
        let app = app();
        let room = json!({"id": "r1", "name": "Den", "type": "Living", "size": 18.5, "house_id": "h1"});
        send(&app, json_request("POST", "/rooms", &room)).await;

        let (status, body) = send(&app, empty_request("DELETE", "/rooms/r1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Room deleted successfully"}));
    }

    #[tokio::test]
    async fn should_keep_path_id_when_update_body_carries_another() {
        let app = app();
        let device = json!({"id": "lamp", "name": "Lamp", "type": "Light", "room_id": "r1"});
        send(&app, json_request("POST", "/devices", &device)).await;

        let replacement = json!({"id": "other", "name": "Desk Lamp", "type": "Light", "room_id": "r2"});
        let (status, body) = send(&app, json_request("PUT", "/devices/lamp", &replacement)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "lamp");
        assert_eq!(body["name"], "Desk Lamp");

        let (status, _) = send(&app, empty_request("GET", "/devices/other")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_malformed_json_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }
}
