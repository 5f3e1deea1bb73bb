pub mod frame;
pub mod lines_plan;

pub use frame::Frame;
pub use lines_plan::{LinesPlan, DEFAULT_CLOSE_MARGIN};
