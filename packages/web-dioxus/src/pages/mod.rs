//! Page components

mod rsvp;

pub use rsvp::Rsvp;
