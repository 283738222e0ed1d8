//! Oil-change interval estimator and the HTTP service behind the
//! calculator form.

pub mod api;
pub mod config;
pub mod error;
pub mod estimation;
pub mod state;
