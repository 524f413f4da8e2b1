mod analytics;
mod attendance;
mod auth;
pub mod client;
mod schedule;
mod students;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
