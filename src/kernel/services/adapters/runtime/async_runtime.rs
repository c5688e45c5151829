use std::io;

/// Owns the tokio runtime that drives autosave timers.
///
/// Multi-thread only: a current-thread runtime would never poll the pulse
/// tasks because the event loop does not `block_on` it.
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
}

impl AsyncRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("codepad-rt")
            .enable_time()
            .build()
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create tokio runtime"))?;
        Ok(Self { runtime })
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }
}
