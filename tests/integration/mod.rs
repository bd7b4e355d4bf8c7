//! Integration test suite for mockpair.
//!
//! These tests drive the public entry points end to end.
//!
//! # Test Categories
//!
//! - `scenarios`: Concrete pools with known outcomes
//! - `properties`: Partition invariants and maximality against brute force
//! - `strategies`: Permutation search vs maximum matching
//! - `records`: JSON participant records through the sign-up filter

mod fixtures;

mod properties;
mod scenarios;
mod strategies;
