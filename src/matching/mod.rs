pub mod truth;
pub use truth::*;

pub mod helpers;
pub use helpers::*;

pub mod eval;
pub use eval::*;

pub mod matcher;
pub use matcher::*;
