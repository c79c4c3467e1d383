//! Contact form state module

mod contact;
mod field;

pub use contact::*;
pub use field::*;
