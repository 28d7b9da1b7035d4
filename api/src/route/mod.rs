pub mod health;
pub mod reservation;
pub mod restaurant;
pub mod v1;
