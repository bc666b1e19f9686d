pub mod elapsed;
pub mod error;
pub mod greeting;
pub mod output;

pub use elapsed::{calculate_elapsed_time, elapsed_since, parse_event_time, Breakdown};
pub use error::{Error, Result};
pub use greeting::{wedding, wedding_at};
