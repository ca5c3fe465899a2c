pub mod config;
pub mod error;
pub mod types;

pub use config::{load_business, parse_business_str};
pub use error::{Error, Result};
pub use types::*;
