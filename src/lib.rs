//! Weakly held event handlers. A broadcaster only keeps a weak reference to each handler's
//! receiver, so dropping (or destroying) the receiver is all it takes to stop receiving events.

use std::{
    any::{type_name, Any, TypeId},
    cell::{Cell, RefCell},
    error::Error,
    rc::{self, Rc},
    sync::{self, Arc},
};

use helpers::ThinPtr;
use log::{debug, error, trace};

mod broadcast;
mod callable;
mod error;
pub mod helpers;
mod liveness;

pub use broadcast::{Broadcaster, EventSource, WeakCallableList};
pub use callable::{
    Function, Handler, LiveCallable, Method, ReceiverRef, WeakAction, WeakCallable, WeakReceiver,
};
pub use error::{WeakEventError, WeakResult};
pub use helpers::config::ListConfig;
pub use liveness::{
    register_destroyable, register_probe, unregister_probe, DestroyFlag, Destroyable, HostWeak,
    LivenessProbe, NotDestroyed, Reachable,
};

#[cfg(test)]
use helpers::test_helpers::*;
