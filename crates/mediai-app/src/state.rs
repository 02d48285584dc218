use std::sync::Arc;

use mediai_analysis::upload::UploadQueue;
use mediai_assistant::TopicResponder;
use mediai_assistant::chat::ChatSession;
use mediai_assistant::responder::load_responder_config;
use mediai_auth::observer::SessionObserver;
use mediai_auth::session::SessionStore;
use mediai_storage::{FileStore, KeyValueStore};
use tokio::sync::Mutex;

use crate::config::AppConfig;

/// Everything the command layer shares. Each mutable component sits behind
/// its own lock so a slow chat reply never holds up sign-in.
pub struct AppState {
    pub config: AppConfig,
    pub session: Arc<Mutex<SessionStore>>,
    pub chat: Arc<Mutex<ChatSession>>,
    pub uploads: Arc<Mutex<UploadQueue>>,
    pub responder: Arc<TopicResponder>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore>,
        responder: TopicResponder,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        let session = SessionStore::new(storage).with_observer(observer);
        Self {
            config,
            session: Arc::new(Mutex::new(session)),
            chat: Arc::new(Mutex::new(ChatSession::new())),
            uploads: Arc::new(Mutex::new(UploadQueue::new())),
            responder: Arc::new(responder),
        }
    }

    /// File-backed storage under the configured data dir, plus the
    /// configured (or built-in) assistant rules.
    pub fn from_config(config: AppConfig, observer: Arc<dyn SessionObserver>) -> eyre::Result<Self> {
        let data_dir = config.resolve_data_dir()?;
        tracing::info!(path = %data_dir.display(), "using client-local storage");
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir));

        let responder = match &config.responder_config {
            Some(path) => {
                let rules = load_responder_config(path)?;
                let responder = TopicResponder::from_config(rules)?;
                tracing::info!(path = %path.display(), rules = responder.rules().len(), "loaded assistant rules");
                responder
            }
            None => TopicResponder::default(),
        };

        Ok(Self::new(config, storage, responder, observer))
    }
}
