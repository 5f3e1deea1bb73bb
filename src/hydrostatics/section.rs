use crate::geometry::Frame;
use crate::math::{quadrature, Point2};

/// The frame polyline augmented with waterplane crossings and clipped to the
/// draft: every strict crossing gains an interpolated point at the draft
/// height, and every point above the draft has its height clamped down to
/// it. Clamped runs contribute zero height span to the integral below.
fn clipped_section(frame: &Frame, draft: f64) -> Vec<Point2> {
    let mut clipped = Vec::with_capacity(frame.offsets().len() + 2);
    let mut prev: Option<Point2> = None;
    for &point in frame.offsets() {
        if let Some(prev) = prev {
            let prev_sub = draft - prev.y;
            let sub = draft - point.y;
            if prev_sub * sub < 0.0 {
                let t = prev_sub / (point.y - prev.y);
                clipped.push(Point2::new(prev.x + t * (point.x - prev.x), draft));
            }
        }
        clipped.push(Point2::new(point.x, point.y.min(draft)));
        prev = Some(point);
    }
    clipped
}

/// Computes the immersed cross-section area of a frame at the given draft,
/// both sides of the hull.
///
/// Half-breadth is integrated over height by the trapezoidal rule along the
/// clipped polyline and the result doubled. Returns 0 when the frame never
/// reaches the draft and the full section area when fully submerged. The
/// magnitude is independent of the keel-to-deck/deck-to-keel traversal
/// convention.
#[must_use]
pub fn cross_section_area(frame: &Frame, draft: f64) -> f64 {
    let clipped = clipped_section(frame, draft);
    let samples: Vec<(f64, f64)> = clipped.iter().map(|point| (point.y, point.x)).collect();
    (2.0 * quadrature::trapezoid(&samples)).abs()
}
