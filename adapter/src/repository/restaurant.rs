use std::collections::HashMap;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RestaurantId,
    list::{ListOptions, PaginatedList},
    restaurant::{ClosingDay, Menu, Restaurant},
};
use kernel::repository::restaurant::RestaurantRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{
    model::restaurant::{ClosingDayRow, MenuRow, RestaurantRow},
    ConnectionPool,
};

const SELECT_RESTAURANT: &str = r#"
    SELECT
        r.restaurant_id,
        r.owner_id,
        m.nickname AS owner_nickname,
        m.email AS owner_email,
        m.phone AS owner_phone,
        m.member_type AS owner_member_type,
        r.food_type,
        r.name,
        r.capacity,
        r.open_time,
        r.last_order_time,
        r.location,
        r.description,
        r.phone
    FROM restaurants AS r
    INNER JOIN members AS m ON r.owner_id = m.member_id
"#;

#[derive(new)]
pub struct RestaurantRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RestaurantRepository for RestaurantRepositoryImpl {
    async fn create(&self, restaurant: &Restaurant) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query(
            r#"
                INSERT INTO restaurants
                (restaurant_id, owner_id, food_type, name, capacity,
                open_time, last_order_time, location, description, phone)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(restaurant.restaurant_id())
        .bind(restaurant.owner_id())
        .bind(restaurant.food_type().as_ref())
        .bind(restaurant.name())
        .bind(restaurant.capacity())
        .bind(restaurant.business_hours().open_time())
        .bind(restaurant.business_hours().last_order_time())
        .bind(restaurant.location())
        .bind(restaurant.description())
        .bind(restaurant.phone())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No restaurant record has been created".into(),
            ));
        }

        // メニューは登録順を position で保つ
        for (position, menu) in restaurant.menu().iter().enumerate() {
            sqlx::query(
                r#"
                    INSERT INTO menus (restaurant_id, position, name, price, description)
                    VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(restaurant.restaurant_id())
            .bind(position as i32)
            .bind(&menu.name)
            .bind(menu.price)
            .bind(menu.description.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        for closing_day in restaurant.closing_days() {
            sqlx::query(
                r#"
                    INSERT INTO closing_days (restaurant_id, day_of_week)
                    VALUES ($1, $2)
                "#,
            )
            .bind(restaurant.restaurant_id())
            .bind(closing_day.day_of_week().to_string())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, restaurant_id: RestaurantId) -> AppResult<Option<Restaurant>> {
        let row: Option<RestaurantRow> =
            sqlx::query_as(&format!("{SELECT_RESTAURANT} WHERE r.restaurant_id = $1"))
                .bind(restaurant_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut restaurants = self.attach_collections(vec![row]).await?;
        Ok(restaurants.pop())
    }

    async fn exists(&self, restaurant_id: RestaurantId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM restaurants WHERE restaurant_id = $1)",
        )
        .bind(restaurant_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<PaginatedList<Restaurant>> {
        let ListOptions { limit, offset } = options;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        let rows: Vec<RestaurantRow> = sqlx::query_as(&format!(
            "{SELECT_RESTAURANT} ORDER BY r.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let items = self.attach_collections(rows).await?;

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items,
        })
    }
}

impl RestaurantRepositoryImpl {
    // 店舗行にメニューと定休日を付けて Restaurant に変換する
    async fn attach_collections(&self, rows: Vec<RestaurantRow>) -> AppResult<Vec<Restaurant>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.restaurant_id.raw()).collect();

        let menu_rows: Vec<MenuRow> = sqlx::query_as(
            r#"
                SELECT restaurant_id, name, price, description
                FROM menus
                WHERE restaurant_id = ANY($1)
                ORDER BY restaurant_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let closing_day_rows: Vec<ClosingDayRow> = sqlx::query_as(
            r#"
                SELECT restaurant_id, day_of_week
                FROM closing_days
                WHERE restaurant_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut menus: HashMap<RestaurantId, Vec<Menu>> = HashMap::new();
        for row in menu_rows {
            menus.entry(row.restaurant_id).or_default().push(row.into());
        }

        let mut closing_days: HashMap<RestaurantId, Vec<ClosingDay>> = HashMap::new();
        for row in closing_day_rows {
            let restaurant_id = row.restaurant_id;
            closing_days
                .entry(restaurant_id)
                .or_default()
                .push(ClosingDay::try_from(row)?);
        }

        rows.into_iter()
            .map(|row| {
                let restaurant_id = row.restaurant_id;
                row.into_restaurant(
                    menus.remove(&restaurant_id).unwrap_or_default(),
                    closing_days.remove(&restaurant_id).unwrap_or_default(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::member::MemberRepositoryImpl;
    use chrono::{NaiveTime, Weekday};
    use kernel::model::{
        member::{event::CreateMember, MemberType},
        restaurant::{event::CreateRestaurant, BusinessHours, FoodType},
    };
    use kernel::repository::member::MemberRepository;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_restaurant(pool: sqlx::PgPool) {
        let db = ConnectionPool::new(pool);
        let owner = MemberRepositoryImpl::new(db.clone())
            .create(CreateMember::new(
                "owner".into(),
                "owner@example.com".into(),
                "01011112222".into(),
                MemberType::Owner,
            ))
            .await
            .unwrap();
        let repo = RestaurantRepositoryImpl::new(db);

        let restaurant = Restaurant::new(
            RestaurantId::new(),
            &owner,
            CreateRestaurant::new(
                FoodType::Korean,
                "Bibim".into(),
                12,
                BusinessHours::new(
                    NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
                )
                .unwrap(),
                "Busan".into(),
                None,
                "0511234567".into(),
                vec![
                    Menu {
                        name: "bibimbap".into(),
                        price: 9000,
                        description: None,
                    },
                    Menu {
                        name: "naengmyeon".into(),
                        price: 11000,
                        description: Some("cold noodles".into()),
                    },
                ],
                vec![ClosingDay::new(Weekday::Sun)],
            ),
        )
        .unwrap();
        repo.create(&restaurant).await.unwrap();

        let found = repo
            .find_by_id(restaurant.restaurant_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name(), "Bibim");
        assert_eq!(found.owner_id(), owner.member_id);
        assert_eq!(found.menu(), restaurant.menu());
        assert_eq!(found.closing_days(), vec![ClosingDay::new(Weekday::Sun)]);
        assert!(repo.exists(restaurant.restaurant_id()).await.unwrap());

        let page = repo
            .find_all(ListOptions {
                limit: 10,
                offset: 0,
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items.len(), 1);
    }
}
