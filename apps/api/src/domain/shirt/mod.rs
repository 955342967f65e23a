// Shirt domain module
// Contains the shirt aggregate and its value objects

#![allow(clippy::module_inception)]

pub mod shirt;
pub mod value_objects;

pub use shirt::{Shirt, ShirtDetails, ShirtInput};
pub use value_objects::ShirtSize;
