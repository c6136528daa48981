//! Runtime module - the host side of the panel behavior
//!
//! - `page` - Page owning the document, bound controllers and the clock
//! - `dispatch` - Bubbling delivery of events to controller listeners
//! - `timer` - One-shot timers on a virtual clock

mod dispatch;
mod page;
pub mod timer;

pub use page::{Navigation, Page, TimelineEntry};
pub use timer::TimerQueue;
