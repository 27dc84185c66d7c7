//! Deciding if a receiver is still alive. Dropped receivers are always dead. Receivers that can be
//! destroyed while still referenced (host objects) are treated as dead as soon as they are
//! destroyed, either because the handler was built with `Handler::host_method` or because a probe
//! is registered for their type.

use super::*;

mod destroyable;
mod host_weak;
mod probe;
mod registry;

pub use destroyable::{DestroyFlag, Destroyable, NotDestroyed};
pub use host_weak::HostWeak;
pub use probe::{LivenessProbe, Reachable};
pub use registry::{register_destroyable, register_probe, unregister_probe};

pub(crate) use registry::registered_probe;
