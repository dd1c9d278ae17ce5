pub mod constants;
pub mod field;
pub mod grid;
pub mod paint;
pub mod ripple;

pub use field::*;
pub use grid::*;
pub use paint::*;
pub use ripple::*;
