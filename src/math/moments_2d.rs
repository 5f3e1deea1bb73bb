use super::Point3;

/// Planar area and moment accumulators for a polyline in the XY plane.
///
/// These are the Green's-theorem line integrals of `y dx`, `y²/2 dx`,
/// `y³/3 dx`, `x·y dx` and `x²·y dx`, evaluated with the exact polynomial
/// antiderivative for each linear segment. All five are signed: reversing
/// the traversal direction negates every accumulator, and a closed curve
/// must be traversed consistently for the area to come out positive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaneMoments {
    /// Signed area between the curve and the x-axis.
    pub area: f64,
    /// First moment about the x-axis.
    pub moment_x: f64,
    /// Second moment about the x-axis.
    pub second_moment_x: f64,
    /// First moment about the y-axis.
    pub moment_y: f64,
    /// Second moment about the y-axis.
    pub second_moment_y: f64,
}

impl PlaneMoments {
    fn accumulate(&mut self, p1: &Point3, p2: &Point3) {
        let (x1, y1) = (p1.x, p1.y);
        let (x2, y2) = (p2.x, p2.y);
        let dx = x2 - x1;

        self.area += dx * (y1 + y2) / 2.0;
        self.moment_x += dx * (y1 * y1 + y1 * y2 + y2 * y2) / 6.0;
        self.second_moment_x +=
            dx * (y1.powi(3) + y1 * y2 * y2 + y1 * y1 * y2 + y2.powi(3)) / 12.0;
        self.moment_y += dx * (2.0 * (x1 * y1 + x2 * y2) + x1 * y2 + x2 * y1) / 6.0;
        self.second_moment_y += dx
            * (y1 * (3.0 * x1 * x1 + x2 * x2 + 2.0 * x1 * x2)
                + y2 * (x1 * x1 + 3.0 * x2 * x2 + 2.0 * x1 * x2))
            / 12.0;
    }
}

/// Accumulates [`PlaneMoments`] over consecutive point pairs of a polyline.
///
/// Only `x` and `y` of each point participate; `z` is ignored, so a
/// waterline curve can be passed directly with its station as `x` and its
/// half-breadth as `y`. Fewer than two points yield all-zero moments.
#[must_use]
pub fn polyline_moments(points: &[Point3]) -> PlaneMoments {
    let mut moments = PlaneMoments::default();
    for pair in points.windows(2) {
        moments.accumulate(&pair[0], &pair[1]);
    }
    moments
}
