pub mod list;
pub mod reservation;
pub mod restaurant;
