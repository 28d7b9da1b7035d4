pub mod clock;
pub mod model;
pub mod repository;
pub mod service;
