//! # Function-backed action (`ActionFn`)
//!
//! [`ActionFn`] wraps a closure `F: Fn(String) -> Fut`, producing a fresh
//! future per repetition. No shared mutable state is required; if the
//! backend needs any, put an `Arc<...>` inside the closure explicitly.
//!
//! ## Example
//! ```rust
//! use autopaste::{ActionError, ActionFn, SinkRef};
//!
//! let sink: SinkRef = ActionFn::arc(|payload: String| async move {
//!     println!("pasting {payload}");
//!     Ok::<_, ActionError>(())
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::actions::action::ActionSink;
use crate::error::ActionError;

/// Function-backed action implementation.
///
/// Wraps a closure that creates a new future per repetition.
#[derive(Debug)]
pub struct ActionFn<F> {
    f: F,
}

impl<F> ActionFn<F> {
    /// Creates a new function-backed action.
    ///
    /// Prefer [`ActionFn::arc`] when you immediately need a [`SinkRef`](crate::SinkRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the action and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> ActionSink for ActionFn<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
{
    async fn perform(&self, payload: &str) -> Result<(), ActionError> {
        (self.f)(payload.to_owned()).await
    }
}
