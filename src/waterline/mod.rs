pub mod crossings;
pub mod drafts;
pub mod extract;

pub use crossings::frame_crossings;
pub use drafts::Drafts;
pub use extract::{extract_waterline, extract_waterlines, Waterline};
