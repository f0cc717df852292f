//! Response wrapper module
//!
//! Wraps decoded JSON (an object, a list, or anything else the API returned)
//! and exposes chainable read-only projections over it.
//!
//! Every projection borrows the current value and returns a new
//! [`ApiResponse`]; the wrapped value is never modified. Projections never
//! fail: a shape mismatch yields `null` (or skips the offending item).

mod wrapper;

pub use wrapper::{lookup_path, ApiResponse};

#[cfg(test)]
mod tests;
