#[macro_use]
extern crate log;

mod client;
pub mod error;
mod schema;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::Error;
