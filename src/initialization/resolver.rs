//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::dns::HickoryMailResolver;

/// Initializes the DNS resolver for mail record lookups.
///
/// Uses the host's system resolver configuration (`/etc/resolv.conf` on Unix)
/// with its default options, so timeouts and attempts are whatever the system
/// configuration specifies. If the system configuration cannot be read, falls
/// back to hickory's default configuration and logs a warning.
pub fn init_resolver() -> HickoryMailResolver {
    let resolver = match TokioAsyncResolver::tokio_from_system_conf() {
        Ok(resolver) => {
            debug!("Using system DNS resolver configuration");
            resolver
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        }
    };
    HickoryMailResolver::new(Arc::new(resolver))
}
