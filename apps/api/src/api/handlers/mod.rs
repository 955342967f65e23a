// HTTP handlers grouped by resource

pub mod auth;
pub mod shirts;
pub mod teams;
