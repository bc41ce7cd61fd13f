pub mod paper;
pub mod vec2;
pub mod z_order;

pub use paper::{Grab, PaperState};
pub use vec2::Vec2;
pub use z_order::ZOrder;
