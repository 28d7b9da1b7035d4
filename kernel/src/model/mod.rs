pub mod id;
pub mod list;
pub mod member;
pub mod reservation;
pub mod restaurant;
