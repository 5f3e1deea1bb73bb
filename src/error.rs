use thiserror::Error;

/// Top-level error type for the hullform hydrostatics kernel.
#[derive(Debug, Error)]
pub enum HullformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Hydrostatics(#[from] HydrostaticsError),

    #[error(transparent)]
    Interchange(#[from] InterchangeError),
}

/// Errors raised while constructing or normalizing hull geometry.
///
/// All of these surface at model-construction time, before any integration
/// or waterline query runs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("frame at station {station} has {count} offsets, need at least 2")]
    TooFewOffsets { station: f64, count: usize },

    #[error("frame at station {station} repeats the offset point at index {index}")]
    RepeatedOffset { station: f64, index: usize },

    #[error("chine index {index} out of range for frame at station {station} with {count} offsets")]
    ChineOutOfRange {
        station: f64,
        index: usize,
        count: usize,
    },

    #[error("lines plan has {count} frames, need at least 2 for longitudinal integration")]
    TooFewFrames { count: usize },

    #[error("frame stations must be strictly increasing: station {next} at index {index} follows {prev}")]
    StationsNotIncreasing { index: usize, prev: f64, next: f64 },

    #[error("frame at station {station} traverses its offsets opposite to the rest of the plan")]
    InconsistentTraversal { station: f64 },
}

/// Errors raised by hydrostatic queries.
#[derive(Debug, Error)]
pub enum HydrostaticsError {
    #[error("displacement is zero for the queried drafts")]
    ZeroDisplacement,
}

/// Errors raised by the interchange document model.
#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("malformed lines plan document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`HullformError`].
pub type Result<T> = std::result::Result<T, HullformError>;
