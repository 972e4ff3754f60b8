use std::sync::Arc;

use tokio::sync::Mutex;

use dorsia_core::models::session::SessionState;
use dorsia_desktop::config::DorsiaConfig;
use dorsia_engine::KnowledgeBase;

/// State managed by Tauri: the immutable knowledge base, the current
/// diagnostic session (at most one at a time), and the user preferences.
/// The mutexes serialize UI access; the engine itself holds no state.
pub struct DesktopState {
    pub kb: KnowledgeBase,
    pub session: Arc<Mutex<Option<SessionState>>>,
    pub config: Arc<Mutex<DorsiaConfig>>,
}

impl DesktopState {
    pub fn new(config: DorsiaConfig) -> Self {
        Self {
            kb: KnowledgeBase::lower_back_pain(),
            session: Arc::new(Mutex::new(None)),
            config: Arc::new(Mutex::new(config)),
        }
    }
}
