//! Small helpers shared by the handlers: counter formatting and animation,
//! plus debounce/throttle wrappers over the [`Scheduler`](crate::dom::Scheduler).

pub mod counter;
pub mod format;
pub mod rate_limit;

pub use counter::{animate_counter, CounterAnimation, CounterFrame, CounterHandle};
pub use format::{format_number, format_value};
pub use rate_limit::{Debounce, Throttle};
