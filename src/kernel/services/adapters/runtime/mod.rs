//! Async runtime adapter: owns the tokio runtime and the message channel back to the event loop.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
