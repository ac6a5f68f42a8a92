pub mod buffer;
pub mod fixtures;
pub mod scripted_runner;

pub use buffer::SharedBuffer;
pub use fixtures::*;
pub use scripted_runner::{Invocation, ScriptedRunner};
