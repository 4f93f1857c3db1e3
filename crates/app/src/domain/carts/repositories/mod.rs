//! Cart Repositories

mod carts;
mod items;

pub use carts::{CartsRepository, MockCartsRepository, PgCartsRepository};
