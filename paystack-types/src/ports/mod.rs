//! Port traits (interfaces for adapters).
//!
//! The client depends on these traits, not on a concrete HTTP stack.

mod transport;

pub use transport::Transport;
