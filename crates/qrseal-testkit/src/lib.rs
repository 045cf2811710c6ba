//! # qrseal Testkit
//!
//! Testing utilities for the qrseal payload protocol.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known messages and keys with expected tags for cross-platform verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the tags every implementation must reproduce:
//!
//! ```rust
//! use qrseal_testkit::vectors::{all_vectors, token_from_vector};
//!
//! for vector in all_vectors() {
//!     let token = token_from_vector(&vector);
//!     println!("{}: {}", vector.name, token);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use qrseal_testkit::generators::{token_from_params, TokenParams};
//!
//! proptest! {
//!     #[test]
//!     fn tokens_are_deterministic(params: TokenParams) {
//!         let t1 = token_from_params(&params);
//!         let t2 = token_from_params(&params);
//!         prop_assert_eq!(t1, t2);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use qrseal_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let token = fixture.make_hmac_token(b"sealed at a fixed instant");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{fixture_instant, multi_key_fixtures, TestFixture, FIXTURE_PASSPHRASE};
pub use generators::{record_from_params, token_from_params, TokenParams};
pub use vectors::{all_vectors, token_from_vector, verify_all_vectors, GoldenVector};
