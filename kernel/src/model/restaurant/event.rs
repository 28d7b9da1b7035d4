use super::{BusinessHours, ClosingDay, FoodType, Menu};
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct CreateRestaurant {
    pub food_type: FoodType,
    pub name: String,
    pub capacity: i32,
    pub business_hours: BusinessHours,
    pub location: String,
    pub description: Option<String>,
    pub phone: String,
    pub menu: Vec<Menu>,
    pub closing_days: Vec<ClosingDay>,
}
