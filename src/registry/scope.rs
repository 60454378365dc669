use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::client::ClientHandle;
use crate::host::Host;

/// Identity of one survivable scope (an app- or screen-level lifetime that
/// outlives reconfiguration of its UI component).
pub type ScopeId = String;

/// The survivable-object store: per-scope get-or-create of the host and
/// client handle instances that must outlive a destroy/recreate cycle.
///
/// The same instance is returned for the same scope until `destroy_scope`
/// tears the scope down, at which point the stored instances get their
/// teardown hooks invoked exactly once. The surrounding framework adapter is
/// expected to construct one registry and call `destroy_scope` when a
/// component is *permanently* gone — not on a mere reconfiguration.
pub struct ScopeRegistry {
    hosts: HashMap<ScopeId, Rc<RefCell<Host>>>,
    clients: HashMap<ScopeId, Rc<RefCell<ClientHandle>>>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self {
            hosts: HashMap::new(),
            clients: HashMap::new(),
        }
    }

    /// The host instance bound to `scope`, created on first use.
    pub fn host(&mut self, scope: &str) -> Rc<RefCell<Host>> {
        self.hosts
            .entry(scope.to_string())
            .or_insert_with(|| Rc::new(RefCell::new(Host::new(scope))))
            .clone()
    }

    /// The client handle bound to `scope`, created on first use.
    pub fn client(&mut self, scope: &str) -> Rc<RefCell<ClientHandle>> {
        self.clients
            .entry(scope.to_string())
            .or_insert_with(|| Rc::new(RefCell::new(ClientHandle::new(scope))))
            .clone()
    }

    pub fn has_host(&self, scope: &str) -> bool {
        self.hosts.contains_key(scope)
    }

    pub fn has_client(&self, scope: &str) -> bool {
        self.clients.contains_key(scope)
    }

    /// Tear down everything stored for `scope`.
    ///
    /// The scope's client handle closes first, so every listening host drops
    /// the client and applies its eviction rule; then the scope's own host
    /// (whose clients have all necessarily closed by now) is shut down.
    pub fn destroy_scope(&mut self, scope: &str) {
        debug!(scope, "destroying scope");

        if let Some(client) = self.clients.remove(scope) {
            ClientHandle::close(&client);
        }
        if let Some(host) = self.hosts.remove(scope) {
            host.borrow_mut().on_host_closed();
        }
    }
}

impl Default for ScopeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
