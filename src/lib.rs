pub mod cache;
pub mod error;
mod flush;

pub use cache::{CacheInfo, FlushCache};
pub use error::FlushIntervalError;
