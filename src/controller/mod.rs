//! Run lifecycle control.
//!
//! The only public API from this module is [`Controller`], which enforces
//! the single-active-run rule, bridges the engine's event stream to
//! subscribers, and bounds every join so shutdown never hangs.

mod core;

pub use self::core::Controller;
