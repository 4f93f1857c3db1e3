//! Shared cart domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod memory;
pub mod seed;

pub use domain::{carts, items, users};

#[cfg(test)]
mod test;

mod ids;
