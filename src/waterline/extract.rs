use crate::geometry::LinesPlan;
use crate::math::{Point2, Point3};
use crate::math::moments_2d::{polyline_moments, PlaneMoments};

use super::crossings::frame_crossings;
use super::Drafts;

/// The intersection of the hull surface with a waterplane, stitched into a
/// single connected curve of `(station, half_breadth, local_draft)` points.
///
/// Stations increase along the curve except for the one direction reversal
/// used to pick up second crossings at an extremity. An empty curve means
/// the waterplane missed every frame; callers must check [`is_empty`] before
/// deriving properties from it.
///
/// The stitching sweep consumes at most two crossings per frame (one on the
/// aft-going pass, one on the forward-going return). Sections crossing the
/// waterplane more than twice leave their excess crossings unconsumed;
/// [`leftover_crossings`] reports how many, so the limitation is visible
/// rather than silent.
///
/// [`is_empty`]: Waterline::is_empty
/// [`leftover_crossings`]: Waterline::leftover_crossings
#[derive(Debug, Clone, PartialEq)]
pub struct Waterline {
    points: Vec<Point3>,
    leftover_crossings: usize,
}

impl Waterline {
    /// Returns the curve points, suitable for plotting as-is.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the waterplane intersected no frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of per-frame crossings the stitching sweep left unconsumed.
    #[must_use]
    pub fn leftover_crossings(&self) -> usize {
        self.leftover_crossings
    }

    /// Returns `true` when every detected crossing made it onto the curve.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.leftover_crossings == 0
    }

    /// Planar area and moment properties of the curve, signed by traversal
    /// direction. Station is the x-axis, half-breadth the y-axis, so the
    /// accumulators describe one side of the waterplane: doubling `area`
    /// and `second_moment_x` gives the full waterplane area and its
    /// transverse second moment about the centerline.
    #[must_use]
    pub fn properties(&self) -> PlaneMoments {
        polyline_moments(&self.points)
    }
}

/// Extracts the waterline curve of `plan` at the given drafts.
///
/// Each frame's crossings are computed at its trim-interpolated draft;
/// crossing-less frames at either longitudinal extreme are discarded, and
/// the rest are stitched by a back-and-forth sweep. The sweep starts past
/// the forward-most station heading aft and pops each visited frame's last
/// remaining crossing; running past either end reverses direction and steps
/// two stations so the turn-around frame is not immediately revisited,
/// letting the return pass pick up second crossings of reentrant sections.
/// The first frame with no crossing left ends the sweep (an interior
/// crossing-less frame therefore terminates the curve), and the result is
/// reversed so stations increase.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn extract_waterline(plan: &LinesPlan, drafts: Drafts) -> Waterline {
    let aft = plan.aft_station();
    let forward = plan.forward_station();

    let mut stations: Vec<(f64, Vec<Point2>)> = plan
        .frames()
        .iter()
        .map(|frame| {
            let local_draft = drafts.at(frame.station(), aft, forward);
            (frame.station(), frame_crossings(frame, local_draft))
        })
        .collect();

    // Drop dry frames from both extremes; interior dry frames stay and
    // terminate the sweep below.
    while stations.last().is_some_and(|(_, c)| c.is_empty()) {
        stations.pop();
    }
    let leading_dry = stations.iter().take_while(|(_, c)| c.is_empty()).count();
    stations.drain(..leading_dry);

    let mut points = Vec::new();
    if stations.is_empty() {
        return Waterline {
            points,
            leftover_crossings: 0,
        };
    }

    let len = stations.len() as isize;
    let mut direction: isize = -1;
    let mut index = len;
    loop {
        index += direction;
        if index < 0 || index >= len {
            direction = -direction;
            index += 2 * direction;
            if index < 0 || index >= len {
                // A single intersecting station has no return pass.
                break;
            }
        }
        let (station, crossings) = &mut stations[index as usize];
        match crossings.pop() {
            Some(crossing) => points.push(Point3::new(*station, crossing.x, crossing.y)),
            None => break,
        }
    }
    points.reverse();

    let leftover_crossings = stations.iter().map(|(_, c)| c.len()).sum();
    Waterline {
        points,
        leftover_crossings,
    }
}

/// Extracts one waterline per entry of `drafts`, e.g. for plotting a set of
/// waterline curves or integrating a waterplane family.
#[must_use]
pub fn extract_waterlines(plan: &LinesPlan, drafts: &[Drafts]) -> Vec<Waterline> {
    drafts
        .iter()
        .map(|&d| extract_waterline(plan, d))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Frame;
    use crate::math::{Point2, TOLERANCE};

    fn p(y: f64, z: f64) -> Point2 {
        Point2::new(y, z)
    }

    fn box_frame(station: f64) -> Frame {
        Frame::new(
            station,
            vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 4.0), p(0.0, 4.0)],
            vec![],
        )
        .unwrap()
    }

    fn low_frame(station: f64) -> Frame {
        // Deck at height 1: fully submerged for drafts above 1.
        Frame::new(
            station,
            vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
            vec![],
        )
        .unwrap()
    }

    fn box_plan() -> LinesPlan {
        LinesPlan::new(
            "box",
            vec![box_frame(0.0), box_frame(5.0), box_frame(10.0)],
        )
        .unwrap()
    }

    #[test]
    fn box_hull_yields_one_point_per_frame() {
        let waterline = extract_waterline(&box_plan(), Drafts::level(2.0));
        assert_eq!(waterline.len(), 3);
        assert!(waterline.is_complete());

        let points = waterline.points();
        for (point, station) in points.iter().zip([0.0, 5.0, 10.0]) {
            assert!((point.x - station).abs() < TOLERANCE);
            assert!((point.y - 2.0).abs() < TOLERANCE);
            assert!((point.z - 2.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn empty_when_hull_is_above_the_waterplane() {
        let waterline = extract_waterline(&box_plan(), Drafts::level(-1.0));
        assert!(waterline.is_empty());
        assert!(waterline.is_complete());
    }

    #[test]
    fn empty_when_hull_is_fully_submerged() {
        let waterline = extract_waterline(&box_plan(), Drafts::level(5.0));
        assert!(waterline.is_empty());
    }

    #[test]
    fn trimmed_draft_varies_along_the_curve() {
        let waterline = extract_waterline(&box_plan(), Drafts::trimmed(1.0, 3.0));
        assert_eq!(waterline.len(), 3);

        let points = waterline.points();
        assert!((points[0].z - 1.0).abs() < TOLERANCE);
        assert!((points[1].z - 2.0).abs() < TOLERANCE);
        assert!((points[2].z - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn dry_extreme_frames_are_discarded() {
        let plan = LinesPlan::new(
            "ends submerged",
            vec![
                low_frame(0.0),
                box_frame(3.0),
                box_frame(6.0),
                low_frame(9.0),
            ],
        )
        .unwrap();

        let waterline = extract_waterline(&plan, Drafts::level(2.0));
        assert_eq!(waterline.len(), 2);
        assert!((waterline.points()[0].x - 3.0).abs() < TOLERANCE);
        assert!((waterline.points()[1].x - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn return_pass_collects_second_crossings() {
        // The middle section is an overhung pocket crossing the waterplane
        // twice; the ends cross once.
        let pocket = Frame::new(
            5.0,
            vec![p(0.0, 2.0), p(1.0, 0.5), p(2.0, 2.0)],
            vec![],
        )
        .unwrap();
        let plan =
            LinesPlan::new("pocket", vec![box_frame(0.0), pocket, box_frame(10.0)]).unwrap();

        let waterline = extract_waterline(&plan, Drafts::level(1.0));
        assert_eq!(waterline.len(), 4);
        assert!(waterline.is_complete());

        // One direction reversal closes the curve at the aft extremity.
        let stations: Vec<f64> = waterline.points().iter().map(|p| p.x).collect();
        assert!((stations[0] - 5.0).abs() < TOLERANCE);
        assert!((stations[1] - 0.0).abs() < TOLERANCE);
        assert!((stations[2] - 5.0).abs() < TOLERANCE);
        assert!((stations[3] - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn excess_crossings_are_reported_not_dropped() {
        // Four crossings at draft 1.25: the sweep consumes two.
        let wavy = Frame::new(
            5.0,
            vec![
                p(0.0, 2.0),
                p(0.5, 0.5),
                p(1.0, 2.0),
                p(1.5, 0.5),
                p(2.0, 2.0),
            ],
            vec![],
        )
        .unwrap();
        let plan = LinesPlan::new("wavy", vec![box_frame(0.0), wavy, box_frame(10.0)]).unwrap();

        let waterline = extract_waterline(&plan, Drafts::level(1.25));
        assert!(!waterline.is_complete());
        assert_eq!(waterline.leftover_crossings(), 2);
    }

    #[test]
    fn single_intersecting_frame_terminates() {
        let plan = LinesPlan::new("stub", vec![box_frame(0.0), low_frame(5.0)]).unwrap();
        let waterline = extract_waterline(&plan, Drafts::level(2.0));
        assert_eq!(waterline.len(), 1);
        assert!((waterline.points()[0].x).abs() < TOLERANCE);
    }

    #[test]
    fn keel_grazing_draft_yields_zero_area_curve() {
        let waterline = extract_waterline(&box_plan(), Drafts::level(0.0));
        assert_eq!(waterline.len(), 3);
        assert!(waterline.properties().area.abs() < TOLERANCE);
    }

    #[test]
    fn waterline_family_extraction() {
        let family = [Drafts::level(1.0), Drafts::level(2.0), Drafts::level(-1.0)];
        let waterlines = extract_waterlines(&box_plan(), &family);
        assert_eq!(waterlines.len(), 3);
        assert_eq!(waterlines[0].len(), 3);
        assert_eq!(waterlines[1].len(), 3);
        assert!(waterlines[2].is_empty());
    }
}
