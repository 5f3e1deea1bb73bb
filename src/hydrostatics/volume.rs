use crate::error::{HydrostaticsError, Result};
use crate::geometry::LinesPlan;
use crate::math::{quadrature, TOLERANCE};
use crate::waterline::Drafts;

use super::section::cross_section_area;

/// Per-frame `(station, immersed area)` samples, each frame evaluated at
/// its trim-interpolated draft.
pub(crate) fn section_area_curve(plan: &LinesPlan, drafts: Drafts) -> Vec<(f64, f64)> {
    let aft = plan.aft_station();
    let forward = plan.forward_station();
    plan.frames()
        .iter()
        .map(|frame| {
            let local_draft = drafts.at(frame.station(), aft, forward);
            (frame.station(), cross_section_area(frame, local_draft))
        })
        .collect()
}

/// Computes the displaced volume of a hull at the given drafts.
///
/// Immersed cross-section areas are integrated over station by Simpson's
/// rule; frame spacing need not be uniform.
pub struct Displacement {
    drafts: Drafts,
}

impl Displacement {
    /// Creates an even-keel displacement query at the given draft.
    #[must_use]
    pub fn new(draft: f64) -> Self {
        Self {
            drafts: Drafts::level(draft),
        }
    }

    /// Sets a distinct forward draft, trimming the waterplane.
    #[must_use]
    pub fn with_trim(mut self, draft_forward: f64) -> Self {
        self.drafts = Drafts::trimmed(self.drafts.aft(), draft_forward);
        self
    }

    pub(crate) fn from_drafts(drafts: Drafts) -> Self {
        Self { drafts }
    }

    /// Executes the query, returning the displaced volume.
    #[must_use]
    pub fn execute(&self, plan: &LinesPlan) -> f64 {
        quadrature::simpson(&section_area_curve(plan, self.drafts))
    }
}

/// Computes the longitudinal center of buoyancy: the station of the
/// displaced volume's centroid.
pub struct Lcb {
    drafts: Drafts,
}

impl Lcb {
    /// Creates an even-keel LCB query at the given draft.
    #[must_use]
    pub fn new(draft: f64) -> Self {
        Self {
            drafts: Drafts::level(draft),
        }
    }

    /// Sets a distinct forward draft, trimming the waterplane.
    #[must_use]
    pub fn with_trim(mut self, draft_forward: f64) -> Self {
        self.drafts = Drafts::trimmed(self.drafts.aft(), draft_forward);
        self
    }

    /// Executes the query: Simpson-integrates `area × station` over station
    /// and divides by the displacement.
    ///
    /// # Errors
    ///
    /// Returns [`HydrostaticsError::ZeroDisplacement`] when the hull
    /// displaces nothing at these drafts, so callers can tell "no
    /// displacement" apart from a valid centroid.
    pub fn execute(&self, plan: &LinesPlan) -> Result<f64> {
        let areas = section_area_curve(plan, self.drafts);
        let displacement = quadrature::simpson(&areas);
        if displacement.abs() < TOLERANCE {
            return Err(HydrostaticsError::ZeroDisplacement.into());
        }

        let moments: Vec<(f64, f64)> = areas
            .iter()
            .map(|&(station, area)| (station, station * area))
            .collect();
        Ok(quadrature::simpson(&moments) / displacement)
    }
}
