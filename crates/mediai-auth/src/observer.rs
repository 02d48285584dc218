use mediai_core::models::notice::Notice;

/// Receives user-facing notices about session changes and non-fatal
/// failures. Implementations must not block.
pub trait SessionObserver: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Discards every notice. Failures are still logged by the session store.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn notify(&self, _notice: &Notice) {}
}
