//! Lists of weakly held handlers and the broadcasters built on them

use super::*;

mod broadcaster;
mod event_source;
#[cfg(test)]
mod tests;
mod weak_callable_list;

pub use broadcaster::Broadcaster;
pub use event_source::EventSource;
pub use weak_callable_list::WeakCallableList;
