// src/context.rs
// The hook set threaded through every canonicalization. Deliberately tiny:
// two optional lookups, nothing else.

use std::fmt;
use std::sync::Arc;

/// A pluggable lookup consulted during canonicalization.
pub type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Runtime context passed to every canonicalization.
///
/// Contains:
/// - `canonical`: "extra canonical name" lookup for the first unit
/// - `un_region`: UN M.49 numeric-region replacement lookup
///
/// Both default to absent, which leaves canonicalization purely syntactic.
/// [`crate::lookup`] ships ready-made implementations.
#[derive(Clone, Default)]
pub struct Context {
    pub(crate) canonical: Option<Lookup>,
    pub(crate) un_region: Option<Lookup>,
}

impl Context {
    /// Canonical replacement for a first unit (language or grandfathered
    /// spelling), if a hook is installed and recognizes it.
    #[inline]
    pub(crate) fn lookup_canonical(&self, unit: &str) -> Option<String> {
        self.canonical.as_ref().and_then(|f| f(unit))
    }

    /// ISO 3166 replacement for a UN M.49 numeric region code.
    #[inline]
    pub(crate) fn lookup_un_region(&self, code: &str) -> Option<String> {
        self.un_region.as_ref().and_then(|f| f(code))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("canonical", &self.canonical.is_some())
            .field("un_region", &self.un_region.is_some())
            .finish()
    }
}
