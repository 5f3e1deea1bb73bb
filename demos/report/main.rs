//! Hydrostatics report for a sample 10 m launch.
//!
//! ```text
//! cargo run --example report
//! ```
//!
//! Loads the hull through the interchange document model, closes every
//! frame onto the centerline and prints a table of hydrostatic quantities
//! over a range of even-keel drafts.

use hullform::geometry::DEFAULT_CLOSE_MARGIN;
use hullform::hydrostatics::{Bm, Displacement, Kb, Lcb};
use hullform::interchange::LinesPlanDoc;
use hullform::waterline::{extract_waterline, Drafts};
use hullform::Result;

const LAUNCH: &str = r#"{
    "name": "launch-10m",
    "frames": [
        { "x": 0.0,  "yz": [[0.02, 0.10], [0.95, 0.16], [1.30, 0.75], [1.38, 1.55]], "chines": [1] },
        { "x": 2.5,  "yz": [[0.0, 0.0], [1.35, 0.12], [1.78, 0.85], [1.86, 1.65]], "chines": [1] },
        { "x": 5.0,  "yz": [[0.0, 0.0], [1.50, 0.10], [1.95, 0.90], [2.00, 1.70]], "chines": [1] },
        { "x": 7.5,  "yz": [[0.0, 0.0], [1.10, 0.20], [1.50, 1.00], [1.55, 1.75]], "chines": [1] },
        { "x": 10.0, "yz": [[0.0, 0.35], [0.35, 0.60], [0.55, 1.30], [0.50, 1.80]] }
    ]
}"#;

fn main() -> Result<()> {
    let mut plan = LinesPlanDoc::from_json(LAUNCH)?.into_lines_plan()?;
    plan.close_frames(DEFAULT_CLOSE_MARGIN);

    let length = plan.forward_station() - plan.aft_station();
    println!("{}: {length:.1} m between perpendiculars", plan.name());
    println!();
    println!(
        "{:>6} {:>10} {:>8} {:>8} {:>8} {:>10}",
        "draft", "volume", "LCB", "KB", "BM", "WP area"
    );

    for draft in [0.3, 0.6, 0.9, 1.2] {
        let displacement = Displacement::new(draft).execute(&plan);
        let lcb = Lcb::new(draft).execute(&plan)?;
        let kb = Kb::new(draft).execute(&plan)?;
        let bm = Bm::new(draft).execute(&plan)?;
        let waterplane = extract_waterline(&plan, Drafts::level(draft));
        let area = 2.0 * waterplane.properties().area;
        println!(
            "{draft:>6.2} {displacement:>10.3} {lcb:>8.3} {kb:>8.3} {bm:>8.3} {area:>10.3}"
        );
    }

    Ok(())
}
