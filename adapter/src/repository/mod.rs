pub mod health;
pub mod member;
pub mod reservation;
pub mod restaurant;
