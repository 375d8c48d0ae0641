mod interval;
mod observation;
mod transition;

pub use interval::*;
pub use observation::*;
pub use transition::*;
