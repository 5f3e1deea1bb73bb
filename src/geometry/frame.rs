use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A transverse hull cross-section at a fixed longitudinal station.
///
/// Offsets trace one side of the hull as `(half_breadth, height)` points,
/// from keel to deck or deck to keel. Heights need not be monotonic (a
/// section may flare or tumble home), but consecutive points must differ.
/// Chine indices mark hard (non-faired) vertices; they annotate the shape
/// and play no role in the hydrostatic queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    station: f64,
    offsets: Vec<Point2>,
    chines: Vec<usize>,
}

impl Frame {
    /// Creates a frame at the given station from its offset polyline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewOffsets`] for fewer than two offsets,
    /// [`GeometryError::RepeatedOffset`] when consecutive points coincide
    /// within [`TOLERANCE`], and [`GeometryError::ChineOutOfRange`] for a
    /// chine index past the offset list.
    pub fn new(station: f64, offsets: Vec<Point2>, chines: Vec<usize>) -> Result<Self> {
        if offsets.len() < 2 {
            return Err(GeometryError::TooFewOffsets {
                station,
                count: offsets.len(),
            }
            .into());
        }
        for (index, pair) in offsets.windows(2).enumerate() {
            if (pair[1] - pair[0]).norm() < TOLERANCE {
                return Err(GeometryError::RepeatedOffset {
                    station,
                    index: index + 1,
                }
                .into());
            }
        }
        for &index in &chines {
            if index >= offsets.len() {
                return Err(GeometryError::ChineOutOfRange {
                    station,
                    index,
                    count: offsets.len(),
                }
                .into());
            }
        }
        Ok(Self {
            station,
            offsets,
            chines,
        })
    }

    /// Returns the longitudinal station of this frame.
    #[must_use]
    pub fn station(&self) -> f64 {
        self.station
    }

    /// Returns the offset polyline as plain points, keel-to-deck order as
    /// constructed. Suitable for handing straight to a plotting collaborator.
    #[must_use]
    pub fn offsets(&self) -> &[Point2] {
        &self.offsets
    }

    /// Returns the hard-chine vertex indices.
    #[must_use]
    pub fn chines(&self) -> &[usize] {
        &self.chines
    }

    /// Multiplies every offset coordinate by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for point in &mut self.offsets {
            point.coords *= factor;
        }
    }

    /// Adds `vector` to every offset in place.
    pub fn translate(&mut self, vector: Vector2) {
        for point in &mut self.offsets {
            *point += vector;
        }
    }

    /// Height change from the first offset to the last, used to check that
    /// all frames of a plan traverse in the same vertical direction.
    pub(crate) fn vertical_span(&self) -> f64 {
        match (self.offsets.first(), self.offsets.last()) {
            (Some(first), Some(last)) => last.y - first.y,
            _ => 0.0,
        }
    }

    /// Closes this frame onto the centerline at both ends.
    ///
    /// An endpoint within `margin` of half-breadth zero snaps to exactly
    /// zero; otherwise a synthetic centerline point at the endpoint's height
    /// is inserted and the endpoint becomes a chine. Idempotent.
    pub(crate) fn close(&mut self, margin: f64) {
        if let Some(first) = self.offsets.first().copied() {
            if first.x.abs() < margin {
                if let Some(point) = self.offsets.first_mut() {
                    point.x = 0.0;
                }
            } else {
                self.offsets.insert(0, Point2::new(0.0, first.y));
                for chine in &mut self.chines {
                    *chine += 1;
                }
                self.chines.insert(0, 1);
            }
        }
        if let Some(last) = self.offsets.last().copied() {
            if last.x.abs() < margin {
                if let Some(point) = self.offsets.last_mut() {
                    point.x = 0.0;
                }
            } else {
                self.chines.push(self.offsets.len() - 1);
                self.offsets.push(Point2::new(0.0, last.y));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HullformError;

    fn p(y: f64, z: f64) -> Point2 {
        Point2::new(y, z)
    }

    #[test]
    fn rejects_single_offset() {
        let result = Frame::new(0.0, vec![p(0.0, 0.0)], vec![]);
        assert!(matches!(
            result,
            Err(HullformError::Geometry(GeometryError::TooFewOffsets { count: 1, .. }))
        ));
    }

    #[test]
    fn rejects_repeated_offset() {
        let result = Frame::new(1.0, vec![p(0.0, 0.0), p(2.0, 1.0), p(2.0, 1.0)], vec![]);
        assert!(matches!(
            result,
            Err(HullformError::Geometry(GeometryError::RepeatedOffset { index: 2, .. }))
        ));
    }

    #[test]
    fn rejects_chine_out_of_range() {
        let result = Frame::new(1.0, vec![p(0.0, 0.0), p(2.0, 1.0)], vec![2]);
        assert!(matches!(
            result,
            Err(HullformError::Geometry(GeometryError::ChineOutOfRange { index: 2, .. }))
        ));
    }

    #[test]
    fn scale_multiplies_both_coordinates() {
        let mut frame = Frame::new(0.0, vec![p(1.0, 2.0), p(3.0, 4.0)], vec![]).unwrap();
        frame.scale(2.0);
        assert!((frame.offsets()[0].x - 2.0).abs() < TOLERANCE);
        assert!((frame.offsets()[0].y - 4.0).abs() < TOLERANCE);
        assert!((frame.offsets()[1].x - 6.0).abs() < TOLERANCE);
        assert!((frame.offsets()[1].y - 8.0).abs() < TOLERANCE);
    }

    #[test]
    fn translate_shifts_every_offset() {
        let mut frame = Frame::new(0.0, vec![p(1.0, 2.0), p(3.0, 4.0)], vec![]).unwrap();
        frame.translate(Vector2::new(0.5, -1.0));
        assert!((frame.offsets()[0].x - 1.5).abs() < TOLERANCE);
        assert!((frame.offsets()[0].y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn close_inserts_centerline_points_and_chines() {
        let mut frame =
            Frame::new(0.0, vec![p(1.5, 0.2), p(2.0, 1.0), p(1.8, 2.0)], vec![1]).unwrap();
        frame.close(0.005);

        let offsets = frame.offsets();
        assert_eq!(offsets.len(), 5);
        assert!(offsets[0].x.abs() < TOLERANCE);
        assert!((offsets[0].y - 0.2).abs() < TOLERANCE);
        assert!(offsets[4].x.abs() < TOLERANCE);
        assert!((offsets[4].y - 2.0).abs() < TOLERANCE);
        // Existing chine shifted by the front insertion, endpoints recorded.
        assert_eq!(frame.chines(), &[1, 2, 3]);
    }

    #[test]
    fn close_snaps_near_zero_endpoints() {
        let mut frame =
            Frame::new(0.0, vec![p(0.003, 0.0), p(2.0, 1.0), p(0.001, 2.0)], vec![]).unwrap();
        frame.close(0.005);

        let offsets = frame.offsets();
        assert_eq!(offsets.len(), 3);
        assert!(offsets[0].x.abs() < TOLERANCE);
        assert!(offsets[2].x.abs() < TOLERANCE);
        assert!(frame.chines().is_empty());
    }
}
