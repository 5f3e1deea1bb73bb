pub mod moments_2d;
pub mod quadrature;

/// 2D point type, used for frame offsets as `(half_breadth, height)`.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type, used for waterline points as `(station, half_breadth, height)`.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
