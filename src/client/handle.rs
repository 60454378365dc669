use std::cell::RefCell;
use std::collections::HashMap;
use std::mem;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::Host;
use crate::registry::ScopeId;

/// Identifies a client across topic operations. A client's id is the scope
/// id of the component it belongs to.
pub type ClientId = String;

/// Per-component token that outlives reconfiguration and signals the
/// component's *permanent* destruction to interested hosts exactly once.
///
/// A handle is created lazily the first time its component registers with
/// any topic. Hosts register themselves as listeners (a set, not a counter)
/// and are notified on `close`; afterwards the handle is dead — listeners
/// added later are accepted but never notified.
pub struct ClientHandle {
    id: ClientId,
    // Normally the listeners are hosts. Held weakly: listening never extends
    // a host's lifetime.
    listeners: HashMap<ScopeId, Weak<RefCell<Host>>>,
    closed: bool,
}

impl ClientHandle {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            listeners: HashMap::new(),
            closed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Add a listening host, keyed by its scope. Returns TRUE if the set
    /// changed.
    pub(crate) fn add_listener(&mut self, scope: &str, host: Weak<RefCell<Host>>) -> bool {
        self.listeners.insert(scope.to_string(), host).is_none()
    }

    /// Remove the listener registered under `scope`. Returns TRUE if the set
    /// changed.
    pub(crate) fn remove_listener(&mut self, scope: &str) -> bool {
        self.listeners.remove(scope).is_some()
    }

    /// Fire the close event to every current listener, in no guaranteed
    /// order, then clear the listener set. Fires at most once: repeated
    /// calls are a no-op.
    ///
    /// Each listening host runs its full client-removal pass before the next
    /// listener is notified, so no partial-update state is ever observable
    /// from outside this call.
    pub fn close(handle: &Rc<RefCell<ClientHandle>>) {
        let (id, listeners) = {
            let mut h = handle.borrow_mut();
            if h.closed {
                return;
            }
            h.closed = true;
            (h.id.clone(), mem::take(&mut h.listeners))
        };

        debug!(client = %id, listeners = listeners.len(), "client closed");

        for host in listeners.into_values() {
            if let Some(host) = host.upgrade() {
                host.borrow_mut().on_client_closed(handle);
            }
        }
    }
}
