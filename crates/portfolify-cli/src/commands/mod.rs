//! Command implementations.

pub mod advise;
pub mod analyze;
pub mod auth;
pub mod case_study;
pub mod cover_letter;
pub mod portfolio;
pub mod resume;
