use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    health::HealthCheckRepositoryImpl, member::MemberRepositoryImpl,
    reservation::ReservationRepositoryImpl, restaurant::RestaurantRepositoryImpl,
};
use kernel::clock::{Clock, SystemClock};
use kernel::repository::health::HealthCheckRepository;
use kernel::service::{
    member::MemberService, reservation::ReservationService, restaurant::RestaurantService,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    restaurant_service: Arc<RestaurantService>,
    reservation_service: Arc<ReservationService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: ConnectionPool, clock: Arc<dyn Clock>) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let member_repository = Arc::new(MemberRepositoryImpl::new(pool.clone()));
        let restaurant_repository = Arc::new(RestaurantRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));

        let member_service = Arc::new(MemberService::new(member_repository));
        let restaurant_service = Arc::new(RestaurantService::new(
            restaurant_repository,
            member_service.clone(),
        ));
        let reservation_service = Arc::new(ReservationService::new(
            reservation_repository,
            restaurant_service.clone(),
            member_service,
            clock,
        ));

        Self {
            health_check_repository,
            restaurant_service,
            reservation_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn restaurant_service(&self) -> Arc<RestaurantService> {
        self.restaurant_service.clone()
    }

    pub fn reservation_service(&self) -> Arc<ReservationService> {
        self.reservation_service.clone()
    }
}
