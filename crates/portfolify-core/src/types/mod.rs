//! Core identifier and URL types.
//!
//! These types enforce invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod base_url;
mod id;

pub use base_url::BaseUrl;
pub use id::Id;
