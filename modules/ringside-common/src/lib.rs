pub mod types;
pub mod config;
pub mod file_config;
pub mod error;

pub use types::*;
pub use config::Config;
pub use file_config::FileConfig;
pub use error::{RingsideError, RingsideResult};
