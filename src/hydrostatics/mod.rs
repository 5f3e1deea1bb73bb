pub mod section;
pub mod stability;
pub mod volume;

pub use section::cross_section_area;
pub use stability::{Bm, Kb, DEFAULT_KB_LEVELS};
pub use volume::{Displacement, Lcb};
