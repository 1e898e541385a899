//! Window state components.
//!
//! State-only logic with no rendering concerns:
//! - View state (which panel region is visible)
//! - Status message (outcome of the last action)
//! - Clock display and the clock sources feeding it

mod view_state;
mod status;
mod clock;

pub use view_state::{Transition, WindowViewState};
pub use status::{StatusMessage, READY};
pub use clock::{Clock, ClockDisplay, ManualClock, SystemClock, CLOCK_FORMAT};
