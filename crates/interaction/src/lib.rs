pub mod machine;
pub mod state;

pub use machine::*;
pub use state::*;
