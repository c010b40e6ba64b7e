//! Structural patterns: how objects are composed into larger ones
//!
//! The Composite pattern lives in [`crate::expression`].

pub mod adapter;
pub mod bridge;
pub mod decorator;
