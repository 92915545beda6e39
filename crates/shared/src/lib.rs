//! Value types shared by the menu core and its hosts.

pub mod domain;
pub mod error;
