//! API endpoint handlers, one module per resource.

pub mod generation;
pub mod health;
pub mod templates;
pub mod validation;
