use chrono::{NaiveTime, Weekday};
use garde::Validate;
use kernel::model::{
    id::{MemberId, RestaurantId},
    restaurant::{event::CreateRestaurant, BusinessHours, ClosingDay, FoodType, Menu, Restaurant},
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[garde(skip)]
    pub food_type: FoodType,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub capacity: i32,
    #[garde(skip)]
    pub open_time: NaiveTime,
    #[garde(skip)]
    pub last_order_time: NaiveTime,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(dive)]
    #[serde(default)]
    pub menu: Vec<MenuRequest>,
    #[garde(skip)]
    #[serde(default)]
    pub closing_days: Vec<Weekday>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 0))]
    pub price: i32,
    #[garde(skip)]
    pub description: Option<String>,
}

impl From<MenuRequest> for Menu {
    fn from(value: MenuRequest) -> Self {
        let MenuRequest {
            name,
            price,
            description,
        } = value;
        Self {
            name,
            price,
            description,
        }
    }
}

// 営業時間の前後関係はここで検証される
impl TryFrom<CreateRestaurantRequest> for CreateRestaurant {
    type Error = AppError;

    fn try_from(value: CreateRestaurantRequest) -> Result<Self, Self::Error> {
        let CreateRestaurantRequest {
            food_type,
            name,
            capacity,
            open_time,
            last_order_time,
            location,
            description,
            phone,
            menu,
            closing_days,
        } = value;
        Ok(CreateRestaurant::new(
            food_type,
            name,
            capacity,
            BusinessHours::new(open_time, last_order_time)?,
            location,
            description,
            phone,
            menu.into_iter().map(Menu::from).collect(),
            closing_days.into_iter().map(ClosingDay::new).collect(),
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRegisteredResponse {
    pub restaurant_id: RestaurantId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
}

impl From<Menu> for MenuResponse {
    fn from(value: Menu) -> Self {
        let Menu {
            name,
            price,
            description,
        } = value;
        Self {
            name,
            price,
            description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub restaurant_id: RestaurantId,
    pub owner_id: MemberId,
    pub food_type: FoodType,
    pub name: String,
    pub capacity: i32,
    pub open_time: NaiveTime,
    pub last_order_time: NaiveTime,
    pub location: String,
    pub description: Option<String>,
    pub phone: String,
    // 先頭の数品だけを返す
    pub menu: Vec<MenuResponse>,
    pub closing_days: Vec<Weekday>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(value: Restaurant) -> Self {
        let business_hours = value.business_hours();
        Self {
            restaurant_id: value.restaurant_id(),
            owner_id: value.owner_id(),
            food_type: value.food_type(),
            name: value.name().to_string(),
            capacity: value.capacity(),
            open_time: business_hours.open_time(),
            last_order_time: business_hours.last_order_time(),
            location: value.location().to_string(),
            description: value.description().map(str::to_string),
            phone: value.phone().to_string(),
            menu: value
                .minor_menu()
                .into_iter()
                .map(MenuResponse::from)
                .collect(),
            closing_days: value
                .closing_days()
                .iter()
                .map(ClosingDay::day_of_week)
                .collect(),
        }
    }
}
