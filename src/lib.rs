#[macro_use]
extern crate derive_destructure;

pub mod data;
pub mod error;
pub mod maze;
pub mod trees;

pub use data::*;
pub use error::{TreeError, VerifyError};
pub use trees::*;
