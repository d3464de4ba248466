use serde::{Deserialize, Serialize};

/// Request body for creating a dish.
///
/// Fields are optional so a missing property is reported by validation alongside any
/// other violations instead of being rejected outright by the JSON extractor.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishDto {
    pub name: Option<String>,
    pub made_by: Option<String>,
    pub cost: Option<f64>,
}

/// Request body for updating a dish, every field overwrites the stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDishDto {
    pub name: Option<String>,
    pub made_by: Option<String>,
    pub cost: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    pub id: i32,
    pub name: String,
    pub made_by: String,
    pub cost: f64,
}

/// Response body listing every dish along with the average cost across all of them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishesAndAveragePriceDto {
    pub dishes: Vec<DishDto>,
    /// Mean cost of all stored dishes, `0` when there are none
    pub average_price: f64,
}
