//! Permission lattice over the four access facets.
//!
//! A [`PermissionSet`] is an immutable value. Granting `write` always grants
//! `append` as well, and revoking `append` always revokes `write`; both rules
//! are applied on construction and on [`PermissionSet::update`].

use std::fmt;

use serde::{Deserialize, Serialize};

const READ: u8 = 0b0001;
const WRITE: u8 = 0b0010;
const APPEND: u8 = 0b0100;
const CONTROL: u8 = 0b1000;

/// Partial facet assignment.
///
/// `None` means "not specified": zero on construction, unchanged on update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionFlags {
    pub read: Option<bool>,
    pub write: Option<bool>,
    pub append: Option<bool>,
    pub control: Option<bool>,
}

impl PermissionFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn read(mut self, value: bool) -> Self {
        self.read = Some(value);
        self
    }

    #[must_use]
    pub fn write(mut self, value: bool) -> Self {
        self.write = Some(value);
        self
    }

    #[must_use]
    pub fn append(mut self, value: bool) -> Self {
        self.append = Some(value);
        self
    }

    #[must_use]
    pub fn control(mut self, value: bool) -> Self {
        self.control = Some(value);
        self
    }
}

/// Required or granted permissions on a resource.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PermissionFlags", into = "PermissionFlags")]
pub struct PermissionSet {
    bits: u8,
}

impl PermissionSet {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const READ_ONLY: Self = Self::new(true, false, false, false);
    /// `write` implies `append`, so this also carries `append`.
    pub const WRITE_ONLY: Self = Self::new(false, true, false, false);
    pub const APPEND_ONLY: Self = Self::new(false, false, true, false);
    pub const READ_WRITE: Self = Self::new(true, true, false, false);

    /// Build a set from the four facets, normalizing so that `write` implies `append`.
    #[must_use]
    pub const fn new(read: bool, write: bool, append: bool, control: bool) -> Self {
        let mut bits = 0;
        if read {
            bits |= READ;
        }
        if write {
            bits |= WRITE | APPEND;
        }
        if append {
            bits |= APPEND;
        }
        if control {
            bits |= CONTROL;
        }
        Self { bits }
    }

    /// Build a set from a partial assignment; unspecified facets are `false`.
    #[must_use]
    pub fn from_flags(flags: PermissionFlags) -> Self {
        Self::NONE.update(flags)
    }

    #[inline]
    #[must_use]
    pub const fn read(self) -> bool {
        self.bits & READ != 0
    }

    #[inline]
    #[must_use]
    pub const fn write(self) -> bool {
        self.bits & WRITE != 0
    }

    #[inline]
    #[must_use]
    pub const fn append(self) -> bool {
        self.bits & APPEND != 0
    }

    #[inline]
    #[must_use]
    pub const fn control(self) -> bool {
        self.bits & CONTROL != 0
    }

    /// Returns `true` if every facet set in `subset` is also set in `self`.
    #[must_use]
    pub const fn includes(self, subset: Self) -> bool {
        self.bits & subset.bits == subset.bits
    }

    /// Returns a new set with the given facets overridden.
    ///
    /// An explicit `append: false` always clears `write`, even when the same
    /// update sets `write: true`.
    #[must_use]
    pub fn update(self, flags: PermissionFlags) -> Self {
        let revokes_append = flags.append == Some(false);
        let write = !revokes_append && flags.write.unwrap_or(self.write());
        Self::new(
            flags.read.unwrap_or(self.read()),
            write,
            flags.append.unwrap_or(self.append()),
            flags.control.unwrap_or(self.control()),
        )
    }

    /// Facet-wise union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns `true` if the set requires or grants a mutation.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        self.write() || self.append()
    }

    /// Returns `true` if no facet is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    fn facet_names(self) -> impl Iterator<Item = &'static str> {
        [
            (self.read(), "read"),
            (self.write(), "write"),
            (self.append(), "append"),
            (self.control(), "control"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

impl From<PermissionFlags> for PermissionSet {
    fn from(flags: PermissionFlags) -> Self {
        Self::from_flags(flags)
    }
}

impl From<PermissionSet> for PermissionFlags {
    fn from(set: PermissionSet) -> Self {
        Self {
            read: Some(set.read()),
            write: Some(set.write()),
            append: Some(set.append()),
            control: Some(set.control()),
        }
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.facet_names().collect();
        if names.is_empty() {
            f.write_str("PermissionSet { (none) }")
        } else {
            write!(f, "PermissionSet {{ {} }}", names.join(", "))
        }
    }
}

impl fmt::Debug for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn all_sets() -> Vec<PermissionSet> {
        (0u8..16)
            .map(|n| PermissionSet::new(n & 1 != 0, n & 2 != 0, n & 4 != 0, n & 8 != 0))
            .collect()
    }

    #[test]
    fn write_implies_append_on_construction() {
        for set in all_sets() {
            assert!(!set.write() || set.append(), "{set} violates write => append");
        }
        let set = PermissionSet::from_flags(PermissionFlags::new().write(true));
        assert!(set.write());
        assert!(set.append());
    }

    #[test]
    fn canonical_constants() {
        assert!(PermissionSet::READ_ONLY.read());
        assert!(!PermissionSet::READ_ONLY.is_mutating());
        assert!(PermissionSet::WRITE_ONLY.write());
        assert!(PermissionSet::WRITE_ONLY.append());
        assert!(!PermissionSet::WRITE_ONLY.read());
        assert!(PermissionSet::APPEND_ONLY.append());
        assert!(!PermissionSet::APPEND_ONLY.write());
        assert_eq!(
            PermissionSet::READ_WRITE,
            PermissionSet::new(true, true, true, false)
        );
    }

    #[test]
    fn revoking_append_revokes_write() {
        let updated = PermissionSet::READ_WRITE.update(PermissionFlags::new().append(false));
        assert!(!updated.append());
        assert!(!updated.write());
        assert!(updated.read());
        for set in all_sets() {
            let updated = set.update(PermissionFlags::new().append(false));
            assert!(!updated.write() && !updated.append(), "{set} -> {updated}");
        }
    }

    #[test]
    fn append_revocation_overrides_explicit_write() {
        let updated = PermissionSet::NONE.update(PermissionFlags::new().write(true).append(false));
        assert!(!updated.write());
        assert!(!updated.append());

        let updated =
            PermissionSet::READ_WRITE.update(PermissionFlags::new().write(true).append(false));
        assert_eq!(updated, PermissionSet::READ_ONLY);
    }

    #[test]
    fn update_keeps_unspecified_facets_and_returns_new_value() {
        let base = PermissionSet::READ_ONLY;
        let escalated = base.update(PermissionFlags::new().control(true));
        assert_eq!(base, PermissionSet::READ_ONLY);
        assert!(escalated.read());
        assert!(escalated.control());
        assert!(!escalated.append());
    }

    #[test]
    fn includes_is_reflexive() {
        for set in all_sets() {
            assert!(set.includes(set), "{set}");
        }
    }

    #[test]
    fn includes_is_transitive() {
        let sets = all_sets();
        for a in &sets {
            for b in &sets {
                for c in &sets {
                    if a.includes(*b) && b.includes(*c) {
                        assert!(a.includes(*c), "{a} {b} {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn includes_checks_each_facet() {
        assert!(PermissionSet::READ_WRITE.includes(PermissionSet::APPEND_ONLY));
        assert!(PermissionSet::READ_WRITE.includes(PermissionSet::NONE));
        assert!(!PermissionSet::APPEND_ONLY.includes(PermissionSet::WRITE_ONLY));
        assert!(!PermissionSet::READ_WRITE.includes(
            PermissionSet::READ_ONLY.update(PermissionFlags::new().control(true))
        ));
    }

    #[test]
    fn union_combines_facets() {
        let set = PermissionSet::READ_ONLY.union(PermissionSet::APPEND_ONLY);
        assert!(set.read());
        assert!(set.append());
        assert!(!set.write());
    }

    #[test]
    fn display_lists_set_facets() {
        assert_eq!(
            PermissionSet::READ_WRITE.to_string(),
            "PermissionSet { read, write, append }"
        );
        assert_eq!(PermissionSet::NONE.to_string(), "PermissionSet { (none) }");
    }

    #[test]
    fn deserialization_normalizes() {
        let set: PermissionSet = serde_json::from_str(r#"{"write": true}"#).unwrap();
        assert_eq!(set, PermissionSet::WRITE_ONLY);

        let set: PermissionSet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());

        assert!(serde_json::from_str::<PermissionSet>(r#"{"delete": true}"#).is_err());
    }

    #[test]
    fn deserialized_append_revocation_clears_write() {
        let set: PermissionSet =
            serde_json::from_str(r#"{"read": true, "write": true, "append": false}"#).unwrap();
        assert_eq!(set, PermissionSet::READ_ONLY);
    }
}
