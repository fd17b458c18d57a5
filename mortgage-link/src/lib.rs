//! Compact, URL-safe share tokens for the calculators' form state.
//!
//! Each calculator's inputs pack into a fixed-width binary layout (15 bytes
//! for the affordability estimator, 14 for the monthly payment calculator),
//! which is then carried as unpadded URL-safe Base64 in the `p` query
//! parameter. One layout-driven pack/unpack engine serves both schemas; the
//! schemas themselves are declarative field tables.
//!
//! Decoding is strict: a token with characters outside the URL-safe Base64
//! alphabet or with the wrong decoded byte length fails with a [`CodecError`]
//! rather than producing partially-populated values. Callers treat any
//! decode failure as "no prefilled state" and fall back to defaults.

mod affordability;
mod error;
mod fields;
mod layout;
mod monthly_payment;
mod token;

pub use affordability::{decode_affordability_query, encode_affordability_query};
pub use error::CodecError;
pub use monthly_payment::{decode_loan_payment, encode_loan_payment};
