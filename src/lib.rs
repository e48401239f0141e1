pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{PlotError, Result};
pub use models::plot::{Plot, PLACEHOLDER_ITEM};
