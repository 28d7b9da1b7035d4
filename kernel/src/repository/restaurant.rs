use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RestaurantId,
    list::{ListOptions, PaginatedList},
    restaurant::Restaurant,
};

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    // 店舗本体とメニュー・定休日をまとめて保存する
    async fn create(&self, restaurant: &Restaurant) -> AppResult<()>;
    async fn find_by_id(&self, restaurant_id: RestaurantId) -> AppResult<Option<Restaurant>>;
    async fn exists(&self, restaurant_id: RestaurantId) -> AppResult<bool>;
    async fn find_all(&self, options: ListOptions) -> AppResult<PaginatedList<Restaurant>>;
}
