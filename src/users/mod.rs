pub mod builder;
pub mod error;
pub mod fields;
pub mod model;
