use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use super::member::MemberService;
use crate::{
    model::{
        id::{MemberId, RestaurantId},
        list::{ListOptions, PaginatedList},
        restaurant::{event::CreateRestaurant, Restaurant},
    },
    repository::restaurant::RestaurantRepository,
};

#[derive(new)]
pub struct RestaurantService {
    restaurant_repository: Arc<dyn RestaurantRepository>,
    member_service: Arc<MemberService>,
}

impl RestaurantService {
    pub async fn save(&self, owner_id: MemberId, event: CreateRestaurant) -> AppResult<RestaurantId> {
        // 会員種別の検証は Restaurant の生成時に行う
        let owner = self.member_service.find_by_id(owner_id).await?;
        let restaurant = Restaurant::new(RestaurantId::new(), &owner, event)?;

        self.restaurant_repository.create(&restaurant).await?;
        tracing::info!(
            restaurant_id = %restaurant.restaurant_id(),
            owner_id = %owner_id,
            "restaurant registered"
        );

        Ok(restaurant.restaurant_id())
    }

    pub async fn find_by_id(&self, restaurant_id: RestaurantId) -> AppResult<Restaurant> {
        self.restaurant_repository
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| not_found(restaurant_id))
    }

    pub async fn validate_restaurant_exists(&self, restaurant_id: RestaurantId) -> AppResult<()> {
        if !self.restaurant_repository.exists(restaurant_id).await? {
            return Err(not_found(restaurant_id));
        }
        Ok(())
    }

    pub async fn get_restaurants(
        &self,
        options: ListOptions,
    ) -> AppResult<PaginatedList<Restaurant>> {
        self.restaurant_repository.find_all(options).await
    }
}

fn not_found(restaurant_id: RestaurantId) -> AppError {
    AppError::EntityNotFound(format!("restaurant ({restaurant_id}) was not found"))
}
