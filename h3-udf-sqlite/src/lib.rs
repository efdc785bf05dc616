#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `h3-udf-sqlite`.

mod ffi;
mod sqlite_compat;
pub use ffi::{register_functions, register_functions_with};
