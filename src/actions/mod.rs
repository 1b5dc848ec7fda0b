//! Action backends: the trait the engine calls once per repetition, and a
//! function-backed implementation for closures.

mod action;
mod action_fn;

pub use action::{ActionSink, SinkRef};
pub use action_fn::ActionFn;
