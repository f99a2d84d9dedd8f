pub mod state;
pub use crate::common::enums::{EaDataType, EaStateFlags};
pub use state::EaState;
