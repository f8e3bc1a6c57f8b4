use crate::token::LuceneTokenKind;

/// A set of [`LuceneTokenKind`]s stored as a bitset.
///
/// Iteration always yields kinds in declaration order, so diagnostics built
/// from a set are deterministic regardless of the order in which kinds were
/// inserted.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct LuceneTokenKindSet {
    bits: u32,
}

impl LuceneTokenKindSet {
    /// The empty set.
    pub const EMPTY: LuceneTokenKindSet = LuceneTokenKindSet { bits: 0 };

    /// Builds a set from a slice of kinds. Usable in `const` contexts.
    pub const fn of(kinds: &[LuceneTokenKind]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u32 << (kinds[i] as u8);
            i += 1;
        }
        Self { bits }
    }

    pub fn contains(&self, kind: LuceneTokenKind) -> bool {
        self.bits & kind.bit() != 0
    }

    pub fn insert(&mut self, kind: LuceneTokenKind) {
        self.bits |= kind.bit();
    }

    pub fn remove(&mut self, kind: LuceneTokenKind) {
        self.bits &= !kind.bit();
    }

    /// Adds every kind of `other` to this set.
    pub fn extend_from(&mut self, other: LuceneTokenKindSet) {
        self.bits |= other.bits;
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates the kinds of this set in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = LuceneTokenKind> + '_ {
        LuceneTokenKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.contains(*kind))
    }

    /// Renders the set for an error message, e.g. "`AND`, `OR`, or term".
    pub fn describe(&self) -> String {
        let descriptions: Vec<&'static str> =
            self.iter().map(|kind| kind.description()).collect();
        match descriptions.as_slice() {
            [] => "nothing".to_string(),
            [only] => (*only).to_string(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}

impl std::fmt::Debug for LuceneTokenKindSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<LuceneTokenKind> for LuceneTokenKindSet {
    fn from_iter<I: IntoIterator<Item = LuceneTokenKind>>(iter: I) -> Self {
        let mut set = LuceneTokenKindSet::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}
