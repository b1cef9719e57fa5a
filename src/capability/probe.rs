//! Best-effort availability check.
//!
//! A probe asks the runtime to resolve a capability's marker. Any failure
//! (missing class, unreadable jar, even a panic inside an archive reader)
//! means "not available"; nothing propagates to the caller. Lookups may still
//! have side effects inside the runtime that are outside fxboot's control.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::runtime::Runtime;

use super::CapabilityKind;

/// Return `true` iff the runtime can resolve the capability's marker.
pub fn probe(runtime: &dyn Runtime, kind: CapabilityKind) -> bool {
    let marker = kind.marker();
    match catch_unwind(AssertUnwindSafe(|| runtime.resolve_marker(&marker))) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::debug!("{} is not available: {}", kind, e);
            false
        }
        Err(_) => {
            tracing::debug!("{} probe panicked; treating as unavailable", kind);
            false
        }
    }
}
