//! Callables that only hold their receiver weakly. A `Handler` names a receiver and a method (or a
//! plain function), a `WeakCallable` is a validated handler that can be resolved and invoked as
//! long as its receiver is alive.

use super::*;

mod args;
mod erased;
mod handler;
mod receiver;
mod weak_action;
mod weak_callable;

pub use args::{Function, Method};
pub use handler::Handler;
pub use receiver::{ReceiverRef, WeakReceiver};
pub use weak_action::WeakAction;
pub use weak_callable::{LiveCallable, WeakCallable};

use erased::{BoundMethod, ErasedFunction, ErasedMethod, StaticFunction};
use handler::Target;
use receiver::StrongReceiver;
