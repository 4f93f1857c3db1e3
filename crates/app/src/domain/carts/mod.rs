//! Carts

pub mod activity;
pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use activity::*;
pub use errors::CartsServiceError;
pub use repositories::*;
pub use service::*;
