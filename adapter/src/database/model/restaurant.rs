use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use kernel::model::{
    id::{MemberId, RestaurantId},
    member::Member,
    restaurant::{
        event::CreateRestaurant, BusinessHours, ClosingDay, FoodType, Menu, Restaurant,
    },
};
use shared::error::{AppError, AppResult};
use sqlx::FromRow;

use super::member::parse_member_type;

// 店舗の取得時は生成時と同じ検証を通すため、オーナー情報も一緒に読む
#[derive(FromRow)]
pub struct RestaurantRow {
    pub restaurant_id: RestaurantId,
    pub owner_id: MemberId,
    pub owner_nickname: String,
    pub owner_email: String,
    pub owner_phone: String,
    pub owner_member_type: String,
    pub food_type: String,
    pub name: String,
    pub capacity: i32,
    pub open_time: NaiveTime,
    pub last_order_time: NaiveTime,
    pub location: String,
    pub description: Option<String>,
    pub phone: String,
}

impl RestaurantRow {
    pub fn into_restaurant(
        self,
        menu: Vec<Menu>,
        closing_days: Vec<ClosingDay>,
    ) -> AppResult<Restaurant> {
        let RestaurantRow {
            restaurant_id,
            owner_id,
            owner_nickname,
            owner_email,
            owner_phone,
            owner_member_type,
            food_type,
            name,
            capacity,
            open_time,
            last_order_time,
            location,
            description,
            phone,
        } = self;

        let owner = Member {
            member_id: owner_id,
            nickname: owner_nickname,
            email: owner_email,
            phone: owner_phone,
            member_type: parse_member_type(&owner_member_type)?,
        };
        let food_type = FoodType::from_str(&food_type)
            .map_err(|e| AppError::ConversionEntityError(format!("food_type {food_type}: {e}")))?;

        BusinessHours::new(open_time, last_order_time)
            .and_then(|business_hours| {
                Restaurant::new(
                    restaurant_id,
                    &owner,
                    CreateRestaurant {
                        food_type,
                        name,
                        capacity,
                        business_hours,
                        location,
                        description,
                        phone,
                        menu,
                        closing_days,
                    },
                )
            })
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

#[derive(FromRow)]
pub struct MenuRow {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
}

impl From<MenuRow> for Menu {
    fn from(value: MenuRow) -> Self {
        let MenuRow {
            restaurant_id: _,
            name,
            price,
            description,
        } = value;
        Menu {
            name,
            price,
            description,
        }
    }
}

#[derive(FromRow)]
pub struct ClosingDayRow {
    pub restaurant_id: RestaurantId,
    pub day_of_week: String,
}

impl TryFrom<ClosingDayRow> for ClosingDay {
    type Error = AppError;

    fn try_from(value: ClosingDayRow) -> Result<Self, Self::Error> {
        Weekday::from_str(&value.day_of_week)
            .map(ClosingDay::new)
            .map_err(|_| {
                AppError::ConversionEntityError(format!(
                    "day_of_week {} is not a weekday",
                    value.day_of_week
                ))
            })
    }
}
