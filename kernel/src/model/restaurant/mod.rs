use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumString};

use crate::model::{
    id::{MemberId, RestaurantId},
    member::Member,
    reservation::policy::UNIT_SECONDS,
};

pub mod event;

use event::CreateRestaurant;

const MIN_NAME_LENGTH: usize = 1;
const MAX_NAME_LENGTH: usize = 30;
const MIN_CAPACITY: i32 = 2;
const MIN_PHONE_LENGTH: usize = 9;
const MAX_PHONE_LENGTH: usize = 11;
// 一日分の予約可能席数の残りがこれを下回ると満席扱い
const MIN_REMAINING_SEATS_FOR_DAY: i64 = 2;
// 店舗詳細で見せるメニューの上限
const MINOR_MENU_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodType {
    Korean,
    Chinese,
    Japanese,
    Western,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open_time: NaiveTime,
    last_order_time: NaiveTime,
}

impl BusinessHours {
    pub fn new(open_time: NaiveTime, last_order_time: NaiveTime) -> AppResult<Self> {
        // 予約枠は開店時刻から 1 時間刻みで作るため、どちらも正時でなければならない
        if !is_on_the_hour(open_time) || !is_on_the_hour(last_order_time) {
            return Err(AppError::InvalidValue(
                "Field openTime and lastOrderTime must be on the hour".into(),
            ));
        }
        if open_time > last_order_time {
            return Err(AppError::InvalidValue(
                "Field openTime must not be after lastOrderTime".into(),
            ));
        }
        Ok(Self {
            open_time,
            last_order_time,
        })
    }

    pub fn open_time(&self) -> NaiveTime {
        self.open_time
    }

    pub fn last_order_time(&self) -> NaiveTime {
        self.last_order_time
    }

    // 開店から最終注文までの時間帯の数（両端を含む）
    fn running_hours(&self) -> i64 {
        i64::from(self.last_order_time.hour()) - i64::from(self.open_time.hour()) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosingDay {
    day_of_week: Weekday,
}

impl ClosingDay {
    pub fn new(day_of_week: Weekday) -> Self {
        Self { day_of_week }
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }
}

#[derive(Debug, Clone)]
pub struct Restaurant {
    restaurant_id: RestaurantId,
    owner_id: MemberId,
    food_type: FoodType,
    name: String,
    capacity: i32,
    business_hours: BusinessHours,
    location: String,
    description: Option<String>,
    phone: String,
    menu: Vec<Menu>,
    closing_days: Vec<ClosingDay>,
}

impl Restaurant {
    /// 店舗を組み立てる。
    ///
    /// オーナー種別、店名、収容人数、電話番号、所在地を検証し、
    /// どれか一つでも満たさなければ該当フィールドを示す `AppError::InvalidValue` を返す。
    pub fn new(
        restaurant_id: RestaurantId,
        owner: &Member,
        event: CreateRestaurant,
    ) -> AppResult<Self> {
        let CreateRestaurant {
            food_type,
            name,
            capacity,
            business_hours,
            location,
            description,
            phone,
            menu,
            closing_days,
        } = event;

        validate_owner(owner)?;
        validate_name(&name)?;
        validate_capacity(capacity)?;
        validate_phone(&phone)?;
        validate_location(&location)?;

        let mut unique_closing_days: Vec<ClosingDay> = Vec::with_capacity(closing_days.len());
        for day in closing_days {
            if !unique_closing_days.contains(&day) {
                unique_closing_days.push(day);
            }
        }

        Ok(Self {
            restaurant_id,
            owner_id: owner.member_id,
            food_type,
            name,
            capacity,
            business_hours,
            location,
            description,
            phone,
            menu,
            closing_days: unique_closing_days,
        })
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn owner_id(&self) -> MemberId {
        self.owner_id
    }

    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn menu(&self) -> Vec<Menu> {
        self.menu.clone()
    }

    pub fn closing_days(&self) -> Vec<ClosingDay> {
        self.closing_days.clone()
    }

    // メニューが 5 品以上あるときは先頭 4 品だけを返す
    pub fn minor_menu(&self) -> Vec<Menu> {
        if self.menu.len() <= MINOR_MENU_SIZE {
            return self.menu();
        }
        self.menu[..MINOR_MENU_SIZE].to_vec()
    }

    pub fn is_available(&self, total_count: i64, request_count: i64) -> bool {
        i64::from(self.capacity) - total_count >= request_count
    }

    pub fn is_available_visitor_count(&self, total_count: i64, request_count: i32) -> bool {
        self.is_available(total_count, i64::from(request_count))
    }

    pub fn is_not_reserve_available_for_day(&self, total_count: i64) -> bool {
        let available_total_capacity =
            self.business_hours.running_hours() * i64::from(self.capacity);
        available_total_capacity - total_count < MIN_REMAINING_SEATS_FOR_DAY
    }

    pub fn is_closing_day(&self, request_date: NaiveDate) -> bool {
        self.closing_days
            .iter()
            .any(|day| day.day_of_week() == request_date.weekday())
    }

    pub fn is_available_visit_date_time(&self, visit_date_time: NaiveDateTime) -> bool {
        let visit_time = visit_date_time.time();
        visit_time >= self.business_hours.open_time()
            && visit_time <= self.business_hours.last_order_time()
    }

    /// 開店時刻から最終注文時刻までの予約枠を 1 時間刻みで返す。
    pub fn generate_time_table(&self) -> Vec<NaiveTime> {
        let open_time = self.business_hours.open_time();
        (0..self.business_hours.running_hours())
            .map(|step| open_time + Duration::seconds(step * UNIT_SECONDS))
            .collect()
    }
}

fn is_on_the_hour(time: NaiveTime) -> bool {
    time.minute() == 0 && time.second() == 0 && time.nanosecond() == 0
}

fn validate_owner(owner: &Member) -> AppResult<()> {
    if !owner.is_owner() {
        return Err(AppError::InvalidValue(format!(
            "member id: {} is not owner, actually type is {}",
            owner.member_id,
            owner.member_type.as_ref().to_lowercase()
        )));
    }
    Ok(())
}

fn validate_name(name: &str) -> AppResult<()> {
    let length = name.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(AppError::InvalidValue(
            "Length of name must over than 0".into(),
        ));
    }
    if length > MAX_NAME_LENGTH {
        return Err(AppError::InvalidValue(
            "Length of name must less than 31".into(),
        ));
    }
    Ok(())
}

fn validate_capacity(capacity: i32) -> AppResult<()> {
    if capacity < MIN_CAPACITY {
        return Err(AppError::InvalidValue("Capacity must over than 1".into()));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.is_empty() {
        return Err(AppError::InvalidValue("Phone must be not empty.".into()));
    }
    if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&phone.len()) {
        return Err(AppError::InvalidValue(
            "Phone must between 9 and 11".into(),
        ));
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidValue("Phone is invalid format".into()));
    }
    Ok(())
}

fn validate_location(location: &str) -> AppResult<()> {
    if location.is_empty() {
        return Err(AppError::InvalidValue("Location must be not empty.".into()));
    }
    Ok(())
}
