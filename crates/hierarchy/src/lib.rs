pub mod bar;
pub mod tree;

pub use bar::*;
pub use tree::*;
