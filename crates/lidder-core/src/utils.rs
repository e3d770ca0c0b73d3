//! Utility functions shared by the scanner and the definitions model.

pub mod paths;

#[doc(inline)]
pub use paths::{path_key, str_key};
