//! Clock Display
//!
//! A clock renders the current time, formatted for one fixed UTC offset, into
//! a display element once per second until its owner stops it. The footer
//! variant also carries a button that navigates to a secondary page.

mod format;
mod ticker;

pub use format::ClockFormat;
pub use ticker::{Clock, ClockHandle, ClockVariant, FooterLink, FOOTER_ELEMENT, HEADER_ELEMENT};
