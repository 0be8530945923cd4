pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod print_help;
pub mod render;
pub mod utils;
pub mod vision;


pub use client::ImageInterpretationClient;
pub use config::ClientConfig;
pub use error::InterpretError;
