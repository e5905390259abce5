pub mod autoplay;
pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod filter;
pub mod financing;
pub mod listing;
pub mod showcase;
pub mod store;

pub use error::{EstateError, Result};
