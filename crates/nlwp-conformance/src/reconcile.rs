//! # Field-Name Reconciliation
//!
//! The two schema dialects intentionally spell some fields differently:
//! the TypeSpec specification uses the MCP-style `_meta` while the
//! implementation's wire name is the bare `meta`. Reconciliation rewrites
//! the implementation-side spelling onto the specification's canonical one
//! before any set comparison, so intentional divergences never surface as
//! drift.
//!
//! The rule set is data, not code: adding a new divergence means adding a
//! pair to [`FIELD_ALIASES`], and every set-based check picks it up.

use std::collections::BTreeSet;

/// A pair of equivalent field names across the two schema dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    /// Spelling used by the specification side.
    pub canonical: &'static str,
    /// Spelling used by the implementation side.
    pub alternate: &'static str,
}

impl FieldAlias {
    /// The implementation-side spelling equivalent to `name`, if `name`
    /// is this alias's canonical spelling.
    pub fn alternate_for(&self, name: &str) -> Option<&'static str> {
        (self.canonical == name).then_some(self.alternate)
    }
}

/// Known naming divergences between the two dialects.
pub const FIELD_ALIASES: &[FieldAlias] = &[FieldAlias {
    canonical: "_meta",
    alternate: "meta",
}];

/// Rewrite `candidate` onto the canonical spellings used by `reference`.
///
/// For each alias pair: if the reference set contains the canonical
/// spelling and the candidate set contains the alternate, the returned
/// copy of the candidate uses the canonical spelling instead. Both inputs
/// are left untouched, and applying the rewrite twice yields the same set
/// as applying it once.
pub fn reconcile_names(
    reference: &BTreeSet<String>,
    candidate: &BTreeSet<String>,
    aliases: &[FieldAlias],
) -> BTreeSet<String> {
    let mut reconciled = candidate.clone();
    for alias in aliases {
        if reference.contains(alias.canonical) && reconciled.remove(alias.alternate) {
            reconciled.insert(alias.canonical.to_string());
        }
    }
    reconciled
}
