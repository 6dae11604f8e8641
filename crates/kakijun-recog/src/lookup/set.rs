//! Reference storage grouped by stroke count

use std::collections::BTreeMap;

use kakijun_core::Drawing;

use super::types::Reference;
use crate::error::{RecogError, RecogResult};

/// References grouped by stroke count
///
/// Labels are unique across the whole set. Within a group references keep
/// insertion order, which decides lookup ties.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<usize, Vec<Reference>>",
        into = "BTreeMap<usize, Vec<Reference>>"
    )
)]
pub struct ReferenceSet {
    groups: BTreeMap<usize, Vec<Reference>>,
}

impl ReferenceSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from pre-grouped references
    ///
    /// Empty groups are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if a key differs from the
    /// stroke count of a drawing filed under it or a label occurs twice,
    /// and a core error for malformed drawings.
    pub fn from_groups(groups: BTreeMap<usize, Vec<Reference>>) -> RecogResult<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for (&count, refs) in &groups {
            for r in refs {
                r.drawing.validate()?;
                if r.stroke_count() != count {
                    return Err(RecogError::InvalidParameter(format!(
                        "reference '{}' has {} strokes but is filed under {}",
                        r.label,
                        r.stroke_count(),
                        count
                    )));
                }
                if !seen.insert(r.label.as_str()) {
                    return Err(RecogError::InvalidParameter(format!(
                        "duplicate reference label '{}'",
                        r.label
                    )));
                }
            }
        }
        let groups = groups.into_iter().filter(|(_, g)| !g.is_empty()).collect();
        Ok(Self { groups })
    }

    /// Insert a reference, replacing any reference with the same label
    ///
    /// A replacement with the same stroke count keeps its position in the
    /// group; otherwise the reference moves to the end of its new group.
    ///
    /// # Returns
    ///
    /// The replaced reference, if any.
    ///
    /// # Errors
    ///
    /// Returns a core error if the drawing is empty or has a stroke with
    /// fewer than 2 points.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        drawing: Drawing,
    ) -> RecogResult<Option<Reference>> {
        drawing.validate()?;
        let reference = Reference::new(label, drawing);
        let count = reference.stroke_count();

        if let Some(slot) = self
            .groups
            .get_mut(&count)
            .and_then(|g| g.iter_mut().find(|r| r.label == reference.label))
        {
            return Ok(Some(std::mem::replace(slot, reference)));
        }
        let previous = self.remove(&reference.label);
        self.groups.entry(count).or_default().push(reference);
        Ok(previous)
    }

    /// Remove the reference with `label`
    pub fn remove(&mut self, label: &str) -> Option<Reference> {
        let (count, index) = self.groups.iter().find_map(|(&count, g)| {
            g.iter()
                .position(|r| r.label == label)
                .map(|index| (count, index))
        })?;
        let group = self.groups.get_mut(&count)?;
        let removed = group.remove(index);
        if group.is_empty() {
            self.groups.remove(&count);
        }
        Some(removed)
    }

    /// Find a reference by label
    pub fn get(&self, label: &str) -> Option<&Reference> {
        self.iter().find(|r| r.label == label)
    }

    /// References with exactly `stroke_count` strokes, in insertion order
    pub fn group(&self, stroke_count: usize) -> &[Reference] {
        self.groups
            .get(&stroke_count)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stroke counts that have at least one reference, ascending
    pub fn stroke_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    /// Total number of references
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All references, by ascending stroke count then insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.groups.values().flatten()
    }
}

impl TryFrom<BTreeMap<usize, Vec<Reference>>> for ReferenceSet {
    type Error = RecogError;

    fn try_from(groups: BTreeMap<usize, Vec<Reference>>) -> RecogResult<Self> {
        Self::from_groups(groups)
    }
}

impl From<ReferenceSet> for BTreeMap<usize, Vec<Reference>> {
    fn from(set: ReferenceSet) -> Self {
        set.groups
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a Reference;
    type IntoIter =
        std::iter::Flatten<std::collections::btree_map::Values<'a, usize, Vec<Reference>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.values().flatten()
    }
}
