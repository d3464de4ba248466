//! Dish endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dish::{CreateDishDto, DishDto, DishesAndAveragePriceDto, UpdateDishDto},
    },
    server::{
        error::Error,
        extract::{ApiJson, ApiPath},
        model::app::AppState,
        service::dish::DishService,
    },
};

/// OpenAPI tag grouping the dish routes.
pub static DISH_TAG: &str = "dish";

/// List every dish along with the average dish price
#[utoipa::path(
    get,
    path = "/api/dishes",
    tag = DISH_TAG,
    responses(
        (status = 200, description = "Success when listing dishes, empty when there are none", body = DishesAndAveragePriceDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let dish_service = DishService::new(&state.db);

    let dishes = dish_service.list().await?;

    tracing::info!(
        count = dishes.dishes.len(),
        average_price = dishes.average_price,
        "Listed dishes"
    );

    Ok((StatusCode::OK, Json(dishes)))
}

/// Get a single dish by ID
#[utoipa::path(
    get,
    path = "/api/dishes/{id}",
    tag = DISH_TAG,
    params(("id" = i32, Path, description = "ID of the dish")),
    responses(
        (status = 200, description = "Success when retrieving the dish", body = DishDto),
        (status = 400, description = "Dish ID is not a number", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let dish_service = DishService::new(&state.db);

    let dish = dish_service.get(id).await?;

    Ok((StatusCode::OK, Json(dish)))
}

/// Create a new dish
///
/// Dish names must be unique, the `Location` header of the response points to the
/// created dish.
#[utoipa::path(
    post,
    path = "/api/dishes",
    tag = DISH_TAG,
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Dish created", body = DishDto),
        (status = 400, description = "Invalid dish fields, unreadable body or a dish with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateDishDto>,
) -> Result<impl IntoResponse, Error> {
    let dish_service = DishService::new(&state.db);

    let dish = dish_service.create(dto).await?;

    tracing::info!(dish_id = %dish.id, name = %dish.name, "Created dish");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/dishes/{}", dish.id))],
        Json(dish),
    ))
}

/// Update an existing dish
///
/// Every field is overwritten. The cost may be raised by at most 20% at a time.
#[utoipa::path(
    put,
    path = "/api/dishes/{id}",
    tag = DISH_TAG,
    params(("id" = i32, Path, description = "ID of the dish")),
    request_body = UpdateDishDto,
    responses(
        (status = 200, description = "Dish updated", body = DishDto),
        (status = 400, description = "Invalid dish fields, unreadable body or path, or cost raised above the allowed increase", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dish(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(dto): ApiJson<UpdateDishDto>,
) -> Result<impl IntoResponse, Error> {
    let dish_service = DishService::new(&state.db);

    let dish = dish_service.update(id, dto).await?;

    tracing::info!(dish_id = %dish.id, cost = dish.cost, "Updated dish");

    Ok((StatusCode::OK, Json(dish)))
}

/// Delete a dish
#[utoipa::path(
    delete,
    path = "/api/dishes/{id}",
    tag = DISH_TAG,
    params(("id" = i32, Path, description = "ID of the dish")),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 400, description = "Dish ID is not a number", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let dish_service = DishService::new(&state.db);

    dish_service.delete(id).await?;

    tracing::info!(dish_id = %id, "Deleted dish");

    Ok(StatusCode::NO_CONTENT)
}
