pub mod config;
pub mod error;
pub mod models;

pub use config::{BoardConfig, PreviewMode};
pub use error::BoardError;
