//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use basen::prelude::*;
//!
//! let value = "hello".to_base32();
//! assert_eq!(value.variant(), Variant::Base32);
//! assert_eq!(value.to_utf8_lossy(), "hello");
//! ```

pub use crate::{
    BaseN,
    Codec,
    ConfigError,
    Variant,
    // Extension traits
    convenience::{AsBaseN, ToBaseN},
    decode,
    encode,
};
