pub mod fakes;
pub mod redis_container;
