use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::{Vector2, TOLERANCE};

use super::Frame;

/// Default closing margin for [`LinesPlan::close_frames`], in offset units.
pub const DEFAULT_CLOSE_MARGIN: f64 = 5e-3;

/// An ordered collection of frames along the hull's longitudinal axis.
///
/// Frames run aft to forward with strictly increasing stations and share a
/// vertical traversal direction, both checked at construction so the
/// waterline and integration queries never see malformed geometry.
///
/// Mutators (`scale`, `translate`, `close_frames`) take `&mut self`; once a
/// plan is constructed and closed, all queries borrow it immutably and may
/// run concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct LinesPlan {
    name: String,
    frames: Vec<Frame>,
}

impl LinesPlan {
    /// Creates a lines plan from frames already ordered aft to forward.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewFrames`] for fewer than two frames,
    /// [`GeometryError::StationsNotIncreasing`] when stations do not
    /// strictly increase, and [`GeometryError::InconsistentTraversal`] when
    /// a frame's offsets run vertically opposite to the rest of the plan.
    pub fn new(name: impl Into<String>, frames: Vec<Frame>) -> Result<Self> {
        if frames.len() < 2 {
            return Err(GeometryError::TooFewFrames {
                count: frames.len(),
            }
            .into());
        }
        for (index, pair) in frames.windows(2).enumerate() {
            let prev = pair[0].station();
            let next = pair[1].station();
            if next.partial_cmp(&prev) != Some(Ordering::Greater) {
                return Err(GeometryError::StationsNotIncreasing {
                    index: index + 1,
                    prev,
                    next,
                }
                .into());
            }
        }

        let mut rising: Option<bool> = None;
        for frame in &frames {
            let span = frame.vertical_span();
            if span.abs() < TOLERANCE {
                continue;
            }
            match rising {
                None => rising = Some(span > 0.0),
                Some(reference) => {
                    if reference != (span > 0.0) {
                        return Err(GeometryError::InconsistentTraversal {
                            station: frame.station(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(Self {
            name: name.into(),
            frames,
        })
    }

    /// Returns the plan's identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the frames, aft to forward.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the aft-most station.
    #[must_use]
    pub fn aft_station(&self) -> f64 {
        self.frames.first().map_or(0.0, Frame::station)
    }

    /// Returns the forward-most station.
    #[must_use]
    pub fn forward_station(&self) -> f64 {
        self.frames.last().map_or(0.0, Frame::station)
    }

    /// Multiplies every offset coordinate of every frame by `factor`.
    /// Stations are left untouched.
    pub fn scale(&mut self, factor: f64) {
        for frame in &mut self.frames {
            frame.scale(factor);
        }
    }

    /// Adds `vector` to every offset of every frame.
    pub fn translate(&mut self, vector: Vector2) {
        for frame in &mut self.frames {
            frame.translate(vector);
        }
    }

    /// Closes every frame onto the centerline.
    ///
    /// Measured offsets rarely reach half-breadth zero exactly; this snaps
    /// endpoints within `margin` of the centerline to zero and inserts
    /// synthetic centerline points elsewhere, so every frame polyline begins
    /// and ends on the centerline and cross-section areas are well defined.
    /// Idempotent. See [`DEFAULT_CLOSE_MARGIN`].
    pub fn close_frames(&mut self, margin: f64) {
        for frame in &mut self.frames {
            frame.close(margin);
        }
    }
}
