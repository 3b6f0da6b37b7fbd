//! External Calls
//!
//! Wrappers around the two things the app does outside the page: asking a
//! text-generation service for a description and exporting the card image.

mod describe;
mod export;

pub use describe::*;
pub use export::*;
