//! Tests driving the full router, covering route registration, JSON extraction and
//! the OpenAPI document.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use dishes::{
    model::{
        api::ErrorDto,
        dish::{DishDto, DishesAndAveragePriceDto},
    },
    server::router::routes,
};
use dishes_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{read_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.into_app_state())
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect a dish to be created, read, updated, listed & deleted through the HTTP API
#[tokio::test]
async fn dish_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dish_tables().build().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/dishes",
            serde_json::json!({ "name": "Tacos", "madeBy": "Rosa", "cost": 10.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: DishDto = read_json(resp).await;

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/dishes/{}", created.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: DishDto = read_json(resp).await;
    assert_eq!(fetched, created);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/dishes/{}", created.id),
            serde_json::json!({ "name": "Tacos al Pastor", "madeBy": "Rosa", "cost": 12.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/dishes"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listing: DishesAndAveragePriceDto = read_json(resp).await;
    assert_eq!(listing.dishes.len(), 1);
    assert_eq!(listing.dishes[0].name, "Tacos al Pastor");
    assert_eq!(listing.average_price, 12.0);

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/dishes/{}", created.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/dishes/{}", created.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect omitted JSON fields to be reported by validation rather than the extractor
#[tokio::test]
async fn missing_fields_are_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dish_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/dishes",
            serde_json::json!({ "name": "Tacos" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(
        body["error"],
        "Model is not valid because following properties are missing: Cost, MadeBy"
    );

    Ok(())
}

/// Expect unreadable request bodies to be answered with 400 & an ErrorDto body
mod malformed_request {
    use super::*;

    async fn post_raw(content_type: Option<&str>, body: &str) -> Result<Response, TestError> {
        let test = TestBuilder::new().with_dish_tables().build().await?;

        let mut request = Request::builder().method(Method::POST).uri("/api/dishes");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let request = request.body(Body::from(body.to_string())).unwrap();

        Ok(app(&test).oneshot(request).await.unwrap())
    }

    #[tokio::test]
    async fn wrong_field_type_is_bad_request() -> Result<(), TestError> {
        let resp = post_raw(
            Some("application/json"),
            r#"{"name":"Soup","madeBy":"Chef","cost":"abc"}"#,
        )
        .await?;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = read_json(resp).await;
        assert!(body.error.contains("cost"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() -> Result<(), TestError> {
        let resp = post_raw(None, r#"{"name":"Soup","madeBy":"Chef","cost":1.0}"#).await?;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = read_json(resp).await;
        assert!(body.error.contains("Content-Type"));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() -> Result<(), TestError> {
        let resp = post_raw(Some("application/json"), "{not json").await?;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let _: ErrorDto = read_json(resp).await;

        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dish_tables().build().await?;

        let resp = app(&test)
            .oneshot(empty_request(Method::GET, "/api/dishes/abc"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let _: ErrorDto = read_json(resp).await;

        Ok(())
    }
}

/// Expect the OpenAPI document to list the dish routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dish_tables().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = read_json(resp).await;
    assert!(doc["paths"]["/api/dishes"].is_object());
    assert!(doc["paths"]["/api/dishes/{id}"].is_object());

    Ok(())
}
