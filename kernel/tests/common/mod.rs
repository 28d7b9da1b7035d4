#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use kernel::{
    clock::FixedClock,
    model::{
        id::{MemberId, ReservationId, RestaurantId},
        list::{ListOptions, PaginatedList},
        member::{event::CreateMember, Member, MemberType},
        reservation::{
            event::CreateReservation, DailyVisitorCount, Reservation, ReservationCustomer,
            ReservationStatus,
        },
        restaurant::{
            event::CreateRestaurant, BusinessHours, ClosingDay, FoodType, Menu, Restaurant,
        },
    },
    repository::{
        member::MemberRepository, reservation::ReservationRepository,
        restaurant::RestaurantRepository,
    },
    service::{
        member::MemberService, reservation::ReservationService, restaurant::RestaurantService,
    },
};
use shared::error::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<Vec<Member>>,
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, event: CreateMember) -> AppResult<Member> {
        let member = Member {
            member_id: MemberId::new(),
            nickname: event.nickname,
            email: event.email,
            phone: event.phone,
            member_type: event.member_type,
        };
        self.members.lock().unwrap().push(member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, member_id: MemberId) -> AppResult<Option<Member>> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.member_id == member_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryRestaurantRepository {
    restaurants: Mutex<Vec<Restaurant>>,
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn create(&self, restaurant: &Restaurant) -> AppResult<()> {
        self.restaurants.lock().unwrap().push(restaurant.clone());
        Ok(())
    }

    async fn find_by_id(&self, restaurant_id: RestaurantId) -> AppResult<Option<Restaurant>> {
        Ok(self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.restaurant_id() == restaurant_id)
            .cloned())
    }

    async fn exists(&self, restaurant_id: RestaurantId) -> AppResult<bool> {
        Ok(self.find_by_id(restaurant_id).await?.is_some())
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<PaginatedList<Restaurant>> {
        let restaurants = self.restaurants.lock().unwrap();
        Ok(PaginatedList {
            total: restaurants.len() as i64,
            limit: options.limit,
            offset: options.offset,
            // 新しく登録したものから返す
            items: restaurants
                .iter()
                .rev()
                .skip(options.offset as usize)
                .take(options.limit as usize)
                .cloned()
                .collect(),
        })
    }
}

// 保存順を保つ予約ストア。顧客情報は会員リポジトリから引く
pub struct InMemoryReservationRepository {
    members: Arc<InMemoryMemberRepository>,
    reservations: Mutex<Vec<Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new(members: Arc<InMemoryMemberRepository>) -> Self {
        Self {
            members,
            reservations: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let customer = self
            .members
            .find_by_id(event.customer_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("customer not found".into()))?;
        let reservation_id = ReservationId::new();
        self.reservations.lock().unwrap().push(Reservation {
            reservation_id,
            restaurant_id: event.restaurant_id,
            customer: ReservationCustomer {
                customer_id: customer.member_id,
                nickname: customer.nickname,
                phone: customer.phone,
            },
            status: event.status,
            customer_input: event.customer_input,
        });
        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.reservation_id == reservation_id)
            .cloned())
    }

    async fn find_all_by_restaurant_id_and_status(
        &self,
        restaurant_id: RestaurantId,
        status: ReservationStatus,
        options: ListOptions,
    ) -> AppResult<PaginatedList<Reservation>> {
        let matched: Vec<Reservation> = self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id && r.status == status)
            .cloned()
            .collect();
        Ok(PaginatedList {
            total: matched.len() as i64,
            limit: options.limit,
            offset: options.offset,
            items: matched
                .into_iter()
                .skip(options.offset as usize)
                .take(options.limit as usize)
                .collect(),
        })
    }

    async fn count_total_visitor_count(
        &self,
        restaurant_id: RestaurantId,
        visit_date: NaiveDate,
        visit_time: NaiveTime,
        statuses: &[ReservationStatus],
    ) -> AppResult<i64> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id && statuses.contains(&r.status))
            .filter(|r| {
                r.customer_input.visit_date() == visit_date
                    && r.customer_input.visit_time() == visit_time
            })
            .map(|r| i64::from(r.customer_input.visitor_count()))
            .sum())
    }

    async fn find_total_visitor_count_per_day(
        &self,
        restaurant_id: RestaurantId,
        statuses: &[ReservationStatus],
    ) -> AppResult<Vec<DailyVisitorCount>> {
        let mut per_day: Vec<DailyVisitorCount> = Vec::new();
        for r in self.reservations.lock().unwrap().iter() {
            if r.restaurant_id != restaurant_id || !statuses.contains(&r.status) {
                continue;
            }
            let count = i64::from(r.customer_input.visitor_count());
            match per_day
                .iter_mut()
                .find(|d| d.visit_date == r.customer_input.visit_date())
            {
                Some(daily) => daily.total_count += count,
                None => per_day.push(DailyVisitorCount {
                    visit_date: r.customer_input.visit_date(),
                    total_count: count,
                }),
            }
        }
        Ok(per_day)
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

pub fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

pub struct TestContext {
    pub clock: Arc<FixedClock>,
    pub members: Arc<InMemoryMemberRepository>,
    pub restaurants: Arc<InMemoryRestaurantRepository>,
    pub reservations: Arc<InMemoryReservationRepository>,
    pub member_service: Arc<MemberService>,
    pub restaurant_service: Arc<RestaurantService>,
    pub reservation_service: ReservationService,
    pub owner: Member,
    pub customer: Member,
    pub restaurant_id: RestaurantId,
}

pub fn create_restaurant_event() -> CreateRestaurant {
    CreateRestaurant::new(
        FoodType::Japanese,
        "Sushi Allen".into(),
        10,
        BusinessHours::new(hour(10), hour(20)).unwrap(),
        "Seoul Gangnam".into(),
        None,
        "0212345678".into(),
        vec![Menu {
            name: "omakase".into(),
            price: 120_000,
            description: None,
        }],
        vec![ClosingDay::new(Weekday::Mon)],
    )
}

/// 現在時刻を 2024-01-10(水) 13:25 に固定し、
/// 収容 10 名・10:00〜20:00 営業・月曜定休の店舗を 1 件登録した状態を作る。
pub async fn setup() -> TestContext {
    let now = NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_hms_opt(13, 25, 0)
        .unwrap();
    let clock = Arc::new(FixedClock::new(now));

    let members = Arc::new(InMemoryMemberRepository::default());
    let restaurants = Arc::new(InMemoryRestaurantRepository::default());
    let reservations = Arc::new(InMemoryReservationRepository::new(members.clone()));

    let member_service = Arc::new(MemberService::new(members.clone()));
    let restaurant_service = Arc::new(RestaurantService::new(
        restaurants.clone(),
        member_service.clone(),
    ));
    let reservation_service = ReservationService::new(
        reservations.clone(),
        restaurant_service.clone(),
        member_service.clone(),
        clock.clone(),
    );

    let owner = members
        .create(CreateMember::new(
            "owner".into(),
            "owner@example.com".into(),
            "01011112222".into(),
            MemberType::Owner,
        ))
        .await
        .unwrap();
    let customer = members
        .create(CreateMember::new(
            "customer".into(),
            "customer@example.com".into(),
            "01033334444".into(),
            MemberType::Customer,
        ))
        .await
        .unwrap();

    let restaurant_id = restaurant_service
        .save(owner.member_id, create_restaurant_event())
        .await
        .unwrap();

    TestContext {
        clock,
        members,
        restaurants,
        reservations,
        member_service,
        restaurant_service,
        reservation_service,
        owner,
        customer,
        restaurant_id,
    }
}
