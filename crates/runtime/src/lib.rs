pub mod debounce;
pub mod notify;

pub use debounce::*;
pub use notify::*;
