use crate::math::TOLERANCE;

/// A waterplane described by its draft at the aft and forward perpendiculars.
///
/// Equal drafts give an even-keel (horizontal) waterplane; unequal drafts
/// describe trim, with the local draft varying linearly along the hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drafts {
    aft: f64,
    forward: f64,
}

impl Drafts {
    /// An even-keel waterplane at the given draft.
    #[must_use]
    pub fn level(draft: f64) -> Self {
        Self {
            aft: draft,
            forward: draft,
        }
    }

    /// A trimmed waterplane with distinct aft and forward drafts.
    #[must_use]
    pub fn trimmed(aft: f64, forward: f64) -> Self {
        Self { aft, forward }
    }

    /// Returns the draft at the aft perpendicular.
    #[must_use]
    pub fn aft(&self) -> f64 {
        self.aft
    }

    /// Returns the draft at the forward perpendicular.
    #[must_use]
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Returns the trim, forward draft minus aft draft.
    #[must_use]
    pub fn trim(&self) -> f64 {
        self.forward - self.aft
    }

    /// Returns the deeper of the two perpendicular drafts.
    #[must_use]
    pub fn deepest(&self) -> f64 {
        self.aft.max(self.forward)
    }

    /// Linearly interpolates the local draft at `station` between the aft
    /// and forward perpendicular stations. A degenerate station span yields
    /// the aft draft.
    #[must_use]
    pub fn at(&self, station: f64, aft_station: f64, forward_station: f64) -> f64 {
        let span = forward_station - aft_station;
        if span.abs() < TOLERANCE {
            return self.aft;
        }
        self.aft + (station - aft_station) / span * (self.forward - self.aft)
    }

    /// Both perpendicular drafts lowered by the same amount, preserving
    /// trim. Used to build the waterplane family for KB integration.
    pub(crate) fn lowered(&self, by: f64) -> Self {
        Self {
            aft: self.aft - by,
            forward: self.forward - by,
        }
    }
}
