//! Session observer for the host.

use mediai_auth::observer::SessionObserver;
use mediai_core::models::notice::Notice;
use tokio::sync::mpsc;

/// Forwards notices to a presentation layer over a channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SessionObserver for ChannelObserver {
    fn notify(&self, notice: &Notice) {
        if self.tx.send(notice.clone()).is_err() {
            tracing::debug!(title = %notice.title, "notice dropped, no receiver");
        }
    }
}
