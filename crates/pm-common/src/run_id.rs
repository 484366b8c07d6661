//! Run identifiers for scoring runs.
//!
//! Every process scores under one ULID so that all reports and log lines it
//! produces can be tied back to the same run, while separate invocations on
//! the same dataset stay distinguishable.
//!
//! # Example
//! ```
//! use pm_common::run_id;
//!
//! let id = run_id::get();
//! assert!(run_id::is_run_id(id));
//! ```

use once_cell::sync::Lazy;
use ulid::Ulid;

static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Process-level run ID, generated on first access. 26 characters, time ordered.
#[inline]
pub fn get() -> &'static str {
    &RUN_ID
}

/// A fresh ULID, e.g. for a single-pair evaluation inside a longer-lived process.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}

/// Whether `value` parses as a ULID.
pub fn is_run_id(value: &str) -> bool {
    Ulid::from_string(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_stable_within_process() {
        assert_eq!(get(), get());
        assert_eq!(get().len(), 26);
    }

    #[test]
    fn generated_ids_are_unique_and_valid() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
        assert!(is_run_id(&a));
        assert!(is_run_id(get()));
    }

    #[test]
    fn rejects_non_ulid_values() {
        assert!(!is_run_id(""));
        assert!(!is_run_id("run-2025-01-01"));
    }
}
