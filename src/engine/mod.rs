pub mod access;
pub mod core;
pub mod errors;
pub mod types;
pub mod value;

pub use errors::*;
