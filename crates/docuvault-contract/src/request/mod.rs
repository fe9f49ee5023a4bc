//! Request types for the create-document operation.

mod documents;
mod validations;

pub use documents::*;
pub use validations::*;
