//! Key-event boundary
//!
//! The engine owns no input device. Whatever reads hardware (or a
//! window system, or a test) pushes [`KeyEvent`]s into an
//! [`InputDispatcher`], which hands them to a single handler on its own
//! thread, in push order.

mod dispatcher;

pub use dispatcher::{InputDispatcher, KeyEvent, KeyState};
