pub mod avatar;
pub mod contracts;
pub mod presenter;

pub use avatar::*;
pub use contracts::*;
pub use presenter::*;
