//! Interchange document model for lines plans.
//!
//! A thin serde layer between the JSON offset-table format and the
//! validated [`LinesPlan`]. The kernel itself never touches files or the
//! network; loading and saving are the caller's concern, and conversion
//! into the core model re-sorts and re-validates whatever arrived.

use serde::{Deserialize, Serialize};

use crate::error::{InterchangeError, Result};
use crate::geometry::{Frame, LinesPlan};
use crate::math::Point2;

/// One frame of the interchange document: a station, its offset pairs and
/// its chine indices. Field names follow the established offset-table
/// files (`x`, `yz`, `chines`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDoc {
    /// Longitudinal station.
    #[serde(rename = "x")]
    pub station: f64,
    /// `[half_breadth, height]` pairs, keel to deck or deck to keel.
    #[serde(rename = "yz")]
    pub offsets: Vec<[f64; 2]>,
    /// Hard-chine vertex indices.
    #[serde(default)]
    pub chines: Vec<usize>,
}

impl FrameDoc {
    fn into_frame(self) -> Result<Frame> {
        let offsets = self
            .offsets
            .iter()
            .map(|&[half_breadth, height]| Point2::new(half_breadth, height))
            .collect();
        Frame::new(self.station, offsets, self.chines)
    }
}

/// A complete lines plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinesPlanDoc {
    /// Plan identifier.
    pub name: String,
    /// Frames, in any order; conversion sorts them by station.
    pub frames: Vec<FrameDoc>,
}

impl LinesPlanDoc {
    /// Parses a document from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Parse`] for malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc = serde_json::from_str(text).map_err(InterchangeError::Parse)?;
        Ok(doc)
    }

    /// Serializes the document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Parse`] when serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let text = serde_json::to_string_pretty(self).map_err(InterchangeError::Parse)?;
        Ok(text)
    }

    /// Converts the document into a validated [`LinesPlan`], sorting frames
    /// by station first.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::error::GeometryError`] raised by frame or plan
    /// validation when the document's geometry is malformed.
    pub fn into_lines_plan(self) -> Result<LinesPlan> {
        let mut docs = self.frames;
        docs.sort_by(|a, b| a.station.total_cmp(&b.station));
        let frames = docs
            .into_iter()
            .map(FrameDoc::into_frame)
            .collect::<Result<Vec<_>>>()?;
        LinesPlan::new(self.name, frames)
    }
}

impl From<&LinesPlan> for LinesPlanDoc {
    fn from(plan: &LinesPlan) -> Self {
        let frames = plan
            .frames()
            .iter()
            .map(|frame| FrameDoc {
                station: frame.station(),
                offsets: frame.offsets().iter().map(|p| [p.x, p.y]).collect(),
                chines: frame.chines().to_vec(),
            })
            .collect();
        Self {
            name: plan.name().to_owned(),
            frames,
        }
    }
}
