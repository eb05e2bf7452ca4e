//! Vendor tag -> client constructor registry.
//!
//! Responsibilities:
//! - Map vendor tags ("idrac", "xclarity", ...) to constructors that build a
//!   [`BmcClient`] from a server descriptor.
//! - Stay safe under concurrent lookups while the coordinator fans out.
//!
//! The registry is an explicitly constructed, dependency-injected object
//! owned by the process entry point, not a hidden global. Registration
//! normally happens once at startup; `reset()` exists only for test
//! isolation and is not compiled into normal builds.

use secrecy::SecretString;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::client::BmcClient;
use crate::error::{ClientError, Result};

/// Identifies one managed server. Immutable once constructed; owned by the
/// caller and passed by value into the coordinator, never mutated by
/// workers.
#[derive(Debug, Clone)]
pub struct ServerDescriptor {
    /// Vendor tag selecting the client dialect.
    pub vendor: String,
    /// BMC hostname or IP address.
    pub hostname: String,
    pub username: String,
    pub password: SecretString,
}

/// Per-invocation connection settings shared by the whole fleet.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    /// Per-request timeout; a timed-out worker produces an error for its
    /// server and never blocks the join barrier.
    pub timeout: Duration,
    /// Verify BMC TLS certificates (off by default; BMCs ship self-signed).
    pub verify_tls: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            verify_tls: false,
        }
    }
}

/// Constructor building a client for one server.
pub type ClientCtor =
    Arc<dyn Fn(&ServerDescriptor, &ConnectionSettings) -> Result<Arc<dyn BmcClient>> + Send + Sync>;

/// Thread-safe mapping from vendor tag to client constructor.
#[derive(Default)]
pub struct ClientRegistry {
    inner: RwLock<HashMap<String, ClientCtor>>,
}

impl ClientRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in vendor dialects registered.
    pub fn with_builtin_vendors() -> Self {
        let registry = Self::new();
        crate::vendors::register_builtin(&registry);
        registry
    }

    /// Install or overwrite the constructor for `tag`. Last registration
    /// wins. The write lock guarantees a completed `register` is visible to
    /// every subsequent `resolve`.
    pub fn register(&self, tag: &str, ctor: ClientCtor) {
        let mut map = self.inner.write().expect("registry lock poisoned");
        map.insert(tag.to_string(), ctor);
    }

    /// Build a client for `server`, failing with `UnsupportedVendor` when
    /// no constructor is registered for its tag.
    pub fn resolve(
        &self,
        server: &ServerDescriptor,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn BmcClient>> {
        let ctor = {
            let map = self.inner.read().expect("registry lock poisoned");
            map.get(&server.vendor).cloned()
        };
        match ctor {
            Some(ctor) => ctor(server, settings),
            None => Err(ClientError::UnsupportedVendor {
                vendor: server.vendor.clone(),
            }),
        }
    }

    /// All registered vendor tags, sorted for stable help/diagnostic text.
    pub fn list_tags(&self) -> Vec<String> {
        let map = self.inner.read().expect("registry lock poisoned");
        let mut tags: Vec<String> = map.keys().cloned().collect();
        tags.sort();
        tags
    }

    /// Clear all registrations. Test isolation only.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn reset(&self) {
        let mut map = self.inner.write().expect("registry lock poisoned");
        map.clear();
    }
}
