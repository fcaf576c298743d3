pub mod audit;
pub mod dispatch;
pub mod member;
pub mod shared;
