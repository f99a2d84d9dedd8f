pub mod config;
pub mod enums;
pub mod error;
pub mod logging;
pub use enums::{EaDataType, EaStateFlags};
