use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum WeakEventError {
    /// The handler has no target to track: its receiver reference was already empty when the
    /// weak callable was built. String is the receiver type name.
    InvalidCallable(String),
    /// The callable carries state (a capturing closure, a boxed callable, a fn pointer) and so
    /// can not be matched again later by unsubscribe. String is the callable type name.
    UnsupportedCallableShape(String),
}

pub type WeakResult<T> = Result<T, WeakEventError>;

impl std::fmt::Display for WeakEventError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidCallable(receiver) => {
                write!(f, "handler receiver {} is null or already dropped", receiver)
            }
            Self::UnsupportedCallableShape(callable) => write!(
                f,
                "{} carries state and can not be unsubscribed later. Capturing closures are not \
                 allowed, use a method or a plain function",
                callable
            ),
        }
    }
}

impl Error for WeakEventError {}
