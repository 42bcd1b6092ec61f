pub mod direction;
pub mod point;

pub use direction::RelativeDirection;
pub use point::Point;
