//! Tests for the get_dishes endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use dishes::{model::dish::DishesAndAveragePriceDto, server::controller::dish::get_dishes};

use super::*;

/// Tests successful response with an empty list.
///
/// Expected: Ok with 200 OK response, no dishes & an average price of 0
#[tokio::test]
async fn success_with_empty_list_when_no_dishes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dish_tables().build().await?;

    let result = get_dishes(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DishesAndAveragePriceDto = read_json(resp).await;
    assert!(body.dishes.is_empty());
    assert_eq!(body.average_price, 0.0);

    Ok(())
}

/// Tests successful response with multiple dishes.
///
/// Expected: Ok with 200 OK response listing every dish with their average price
#[tokio::test]
async fn success_with_dishes_and_average_price() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dish_tables()
        .with_dish("Soup", "Chef", 10.0)
        .with_dish("Salad", "Chef", 20.0)
        .with_dish("Bread", "Baker", 3.0)
        .build()
        .await?;

    let result = get_dishes(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DishesAndAveragePriceDto = read_json(resp).await;
    assert_eq!(body.dishes.len(), 3);
    assert_eq!(body.average_price, 11.0);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_dishes(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
