//! Shared type definitions for schemagen
//!
//! This crate provides the small vocabulary shared by the generator crates:
//!
//! - [`Dialect`] - Database dialect enum (SQLite, PostgreSQL)
//! - PostgreSQL driver parser-behavior options in the [`postgres`] module
//! - Serde helpers for `Cow<'static, str>` fields in [`serde_helpers`]
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::Cow,
        string::{String, ToString},
        vec::Vec,
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        borrow::Cow,
        string::{String, ToString},
        vec::Vec,
    };
}

mod dialect;
pub mod postgres;
pub mod serde_helpers;

pub use dialect::{Dialect, DialectParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::Dialect;
    pub use crate::postgres::{DateParser, NumericParser, TimestampParser};
}
