//! Ventacamisetas API Library
//!
//! REST backend for a football shirt shop: teams, the shirts sold for
//! them, and the admin gate in front of every catalog write.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
