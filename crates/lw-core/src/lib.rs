pub mod error;
pub mod logs;
pub mod store;
pub mod types;

pub use crate::error::LogError;
pub use crate::logs::Logwell;
pub use crate::store::Store;
