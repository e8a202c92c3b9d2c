pub mod direction;
pub use direction::*;

pub mod criteria;
pub use criteria::*;
