use std::cell::RefCell;
use std::rc::Rc;

use crate::core::app::App;
use crate::host::{DetachedHost, HostEnvironment, HostUser, OutboundMessage, ThemePalette};
use crate::storage::MemorySnapshotStore;

/// Host double that records every payload handed to the bridge.
///
/// Clones share the recording, so tests keep one handle while the controller
/// owns another.
#[derive(Clone, Default)]
pub struct RecordingHost {
    pub sent: Rc<RefCell<Vec<OutboundMessage>>>,
    pub user: Option<HostUser>,
    pub chat_id: Option<i64>,
    pub theme: Option<ThemePalette>,
}

impl HostEnvironment for RecordingHost {
    fn user(&self) -> Option<HostUser> {
        self.user.clone()
    }

    fn chat_id(&self) -> Option<i64> {
        self.chat_id
    }

    fn theme(&self) -> Option<ThemePalette> {
        self.theme.clone()
    }

    fn send_data(&self, payload: &OutboundMessage) {
        self.sent.borrow_mut().push(payload.clone());
    }
}

/// Controller over a fresh in-memory store and a detached host.
pub fn create_test_app() -> App {
    App::start(Box::new(MemorySnapshotStore::new()), Box::new(DetachedHost))
}

/// Controller wired to a recording host; the returned handle observes the
/// payloads the controller emits.
pub fn create_recording_app() -> (App, RecordingHost) {
    let host = RecordingHost::default();
    let app = App::start(
        Box::new(MemorySnapshotStore::new()),
        Box::new(host.clone()),
    );
    (app, host)
}
