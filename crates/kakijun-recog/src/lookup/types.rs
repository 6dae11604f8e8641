//! Type definitions for reference lookup

use kakijun_core::Drawing;

/// A labelled model drawing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// Label shown to the user, usually the character itself
    pub label: String,
    /// Model strokes in drawing order
    pub drawing: Drawing,
}

impl Reference {
    /// Create a reference
    pub fn new(label: impl Into<String>, drawing: Drawing) -> Self {
        Self {
            label: label.into(),
            drawing,
        }
    }

    /// Number of strokes of the model drawing
    pub fn stroke_count(&self) -> usize {
        self.drawing.stroke_count()
    }
}

/// Result of a lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch<'a> {
    /// The winning reference
    pub reference: &'a Reference,
    /// Its score against the candidate (lower is closer)
    pub score: f64,
}

impl BestMatch<'_> {
    /// Label of the winning reference
    pub fn label(&self) -> &str {
        &self.reference.label
    }
}
