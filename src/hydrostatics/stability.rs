use crate::error::{HydrostaticsError, Result};
use crate::geometry::LinesPlan;
use crate::math::{quadrature, TOLERANCE};
use crate::waterline::{extract_waterline, Drafts};

use super::volume::Displacement;

/// Default number of waterplane levels for [`Kb`] integration.
pub const DEFAULT_KB_LEVELS: u32 = 21;

/// Computes KB, the height of the center of buoyancy above the baseline.
///
/// A family of waterplanes is extracted at evenly spaced levels from the
/// deepest waterplane up to the target drafts (trim preserved, both
/// perpendiculars lowered in parallel); waterplane areas are then
/// Simpson-integrated over height for volume and vertical moment.
pub struct Kb {
    drafts: Drafts,
    levels: u32,
}

impl Kb {
    /// Creates an even-keel KB query at the given draft.
    #[must_use]
    pub fn new(draft: f64) -> Self {
        Self {
            drafts: Drafts::level(draft),
            levels: DEFAULT_KB_LEVELS,
        }
    }

    /// Sets a distinct forward draft, trimming the waterplane family.
    #[must_use]
    pub fn with_trim(mut self, draft_forward: f64) -> Self {
        self.drafts = Drafts::trimmed(self.drafts.aft(), draft_forward);
        self
    }

    /// Sets the number of waterplane levels (minimum 3).
    #[must_use]
    pub fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Executes the query, returning the vertical centroid of the displaced
    /// volume above the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`HydrostaticsError::ZeroDisplacement`] when the integrated
    /// waterplane volume vanishes.
    pub fn execute(&self, plan: &LinesPlan) -> Result<f64> {
        let deepest = self.drafts.deepest();
        let levels = self.levels.max(3);

        let mut areas = Vec::new();
        let mut moments = Vec::new();
        for step in 0..levels {
            let fraction = f64::from(step) / f64::from(levels - 1);
            let level = self.drafts.lowered((1.0 - fraction) * deepest);
            let height = fraction * deepest;
            let area = 2.0 * extract_waterline(plan, level).properties().area;
            areas.push((height, area));
            moments.push((height, area * height));
        }

        let volume = quadrature::simpson(&areas);
        if volume.abs() < TOLERANCE {
            return Err(HydrostaticsError::ZeroDisplacement.into());
        }
        Ok(quadrature::simpson(&moments) / volume)
    }
}

/// Computes BM, the metacentric radius: the transverse second moment of the
/// waterplane about its centroidal longitudinal axis divided by the
/// displaced volume.
///
/// The waterplane is symmetric about the centerline, so the centerline is
/// its centroidal longitudinal axis and the second moment follows directly
/// from the extracted waterline curve.
pub struct Bm {
    drafts: Drafts,
}

impl Bm {
    /// Creates an even-keel BM query at the given draft.
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

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`HydrostaticsError::ZeroDisplacement`] when the hull
    /// displaces nothing at these drafts.
    pub fn execute(&self, plan: &LinesPlan) -> Result<f64> {
        let displacement = Displacement::from_drafts(self.drafts).execute(plan);
        if displacement.abs() < TOLERANCE {
            return Err(HydrostaticsError::ZeroDisplacement.into());
        }

        let waterplane = extract_waterline(plan, self.drafts);
        let transverse_inertia = 2.0 * waterplane.properties().second_moment_x;
        Ok(transverse_inertia / displacement)
    }
}
