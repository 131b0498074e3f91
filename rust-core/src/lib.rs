//! Honeycomb nanoribbon library
//!
//! This library builds armchair and zigzag nanoribbons and joins ribbon
//! sections of different widths into heteroribbons without lone atoms.

pub mod atoms;
pub mod config;
pub mod error;
pub mod geometries;
pub mod heteroribbon;
pub mod interfaces;
pub mod lattice;

pub use error::{Result, RibbonError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
