#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core qualifier lattice for divide-by-zero tracking.
//!
//! This crate is deliberately host-agnostic: it knows nothing about
//! expression trees, annotations, or diagnostics. It defines the four
//! abstract values an integer expression can carry and the subtype/join
//! algebra over them. Everything here is a pure total function.

mod qualifier;

pub use qualifier::{Qualifier, join_all};
