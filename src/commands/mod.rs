//! Command implementations

pub mod countries;
pub mod dispatch;
pub mod distance;
pub mod interactive;
pub mod route;
