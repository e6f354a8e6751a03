//! Horizon account lookups with retry, backoff and a concurrency cap

pub mod client;
pub mod retry;

pub use client::HorizonClient;
pub use retry::{calculate_next_backoff, execute_with_timeout};
