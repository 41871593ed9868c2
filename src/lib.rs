pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod utils;

pub use error::{ActivityError, Result};
pub use events::{classify, Activity, EventKind, RawEvent};
