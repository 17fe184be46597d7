pub mod contact;
pub mod field;
mod macros;
pub mod validation;
pub mod view;
