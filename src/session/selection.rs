use std::collections::BTreeSet;

/// Ordered set of chosen option indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<usize>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, option: usize) -> bool {
        self.0.contains(&option)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Collects the indices of the set slots of a live selection.
    pub fn from_flags(flags: &[bool]) -> Self {
        flags
            .iter()
            .enumerate()
            .filter_map(|(index, &chosen)| chosen.then_some(index))
            .collect()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
