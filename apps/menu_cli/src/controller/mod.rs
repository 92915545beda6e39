//! Controller layer: typed input events and the loop that feeds them to the session.

pub mod events;
pub mod orchestration;
