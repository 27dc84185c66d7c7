use super::*;
use anymap::Map;
use std::sync::{PoisonError, RwLock};

type SharedProbe<R> = Arc<dyn LivenessProbe<R> + Send + Sync>;

/// Registry slot for the probe of receiver type `R`
struct ProbeFor<R: 'static>(SharedProbe<R>);

lazy_static::lazy_static! {
    static ref PROBES: RwLock<Map<dyn anymap::any::Any + Send + Sync>> = RwLock::new(Map::new());
}

/// Use the given probe for receivers of type `R`, on every thread. Handlers without a probe of
/// their own look it up each time they check liveness, so this also applies to handlers subscribed
/// before the call. Replaces any probe already registered for `R`.
pub fn register_probe<R, P>(probe: P)
where
    R: Any,
    P: LivenessProbe<R> + Send + Sync + 'static,
{
    let replaced = PROBES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(ProbeFor::<R>(Arc::new(probe)))
        .is_some();
    if replaced {
        debug!("replaced liveness probe for {}", type_name::<R>());
    } else {
        trace!("registered liveness probe for {}", type_name::<R>());
    }
}

/// Treat receivers of type `R` as dead as soon as they are destroyed
pub fn register_destroyable<R>()
where
    R: Destroyable + Any,
{
    register_probe::<R, _>(NotDestroyed);
}

/// Go back to the default probe for `R`. Returns if a probe was registered.
pub fn unregister_probe<R: Any>() -> bool {
    PROBES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove::<ProbeFor<R>>()
        .is_some()
}

/// The probe registered for `R`, if any. The lock is released before returning, so the probe is
/// free to touch the registry.
pub(crate) fn registered_probe<R: Any>() -> Option<SharedProbe<R>> {
    PROBES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get::<ProbeFor<R>>()
        .map(|slot| slot.0.clone())
}
