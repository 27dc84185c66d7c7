use super::*;

/// A method descriptor with its receiver type erased, so handlers bound to different receiver
/// types can live in the same list.
pub trait ErasedMethod<A> {
    fn call(&self, receiver: &dyn Any, args: A);
    /// Asks the liveness probe chosen for the receiver type. Only called with a receiver that has
    /// already been upgraded.
    fn is_alive(&self, receiver: &dyn Any) -> bool;
    /// Identity of the method. Every function item and closure has its own type.
    fn id(&self) -> TypeId;
    /// If the callable is zero-sized, and so can not carry state that identity would miss
    fn is_stateless(&self) -> bool;
    fn method_name(&self) -> &'static str;
    fn receiver_name(&self) -> &'static str;
}

pub struct BoundMethod<R, F> {
    method: F,
    /// None to use whatever probe is registered for `R` at the time of the check
    probe: Option<Rc<dyn LivenessProbe<R>>>,
}

impl<R: Any, F> BoundMethod<R, F> {
    pub fn new(method: F) -> Self {
        Self {
            method,
            probe: None,
        }
    }

    pub fn with_probe(method: F, probe: Rc<dyn LivenessProbe<R>>) -> Self {
        Self {
            method,
            probe: Some(probe),
        }
    }
}

impl<R, F, A> ErasedMethod<A> for BoundMethod<R, F>
where
    R: Any,
    F: Method<R, A>,
{
    fn call(&self, receiver: &dyn Any, args: A) {
        match receiver.downcast_ref::<R>() {
            Some(receiver) => Method::call(&self.method, receiver, args),
            None => error!(
                "{} invoked on a receiver that is not a {} (this should never happen)",
                type_name::<F>(),
                type_name::<R>()
            ),
        }
    }

    fn is_alive(&self, receiver: &dyn Any) -> bool {
        match receiver.downcast_ref::<R>() {
            Some(receiver) => match &self.probe {
                Some(probe) => probe.is_alive(receiver),
                None => liveness::registered_probe::<R>()
                    .map_or(true, |probe| probe.is_alive(receiver)),
            },
            None => false,
        }
    }

    fn id(&self) -> TypeId {
        TypeId::of::<F>()
    }

    fn is_stateless(&self) -> bool {
        std::mem::size_of::<F>() == 0
    }

    fn method_name(&self) -> &'static str {
        type_name::<F>()
    }

    fn receiver_name(&self) -> &'static str {
        type_name::<R>()
    }
}

/// Same as `ErasedMethod`, for functions with no receiver
pub trait ErasedFunction<A> {
    fn call(&self, args: A);
    fn id(&self) -> TypeId;
    fn is_stateless(&self) -> bool;
    fn function_name(&self) -> &'static str;
}

pub struct StaticFunction<F>(pub F);

impl<F, A> ErasedFunction<A> for StaticFunction<F>
where
    F: Function<A>,
{
    fn call(&self, args: A) {
        Function::call(&self.0, args)
    }

    fn id(&self) -> TypeId {
        TypeId::of::<F>()
    }

    fn is_stateless(&self) -> bool {
        std::mem::size_of::<F>() == 0
    }

    fn function_name(&self) -> &'static str {
        type_name::<F>()
    }
}
