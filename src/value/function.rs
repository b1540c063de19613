use std::{fmt, sync::Arc};

use crate::value::{
    core::{Value, ValueResult},
    object::Object,
};

type Callable = dyn Fn(&Object) -> ValueResult<Value> + Send + Sync;

/// A callable stored inside a [`Value`].
///
/// Functions take their arguments as a single record and return a value.
/// Cloning a function shares the closure; two functions compare equal only
/// when they share the same closure.
///
/// # Example
/// ```
/// use dynvar::value::{core::Value, function::Function, object::Object};
///
/// let greet = Function::new(|args| {
///     let name = args.get("name").cloned().unwrap_or_default();
///     Value::from("hello ").add(&name)
/// });
///
/// let args = Object::from([("name", "Max")]);
/// assert_eq!(greet.call(&args).unwrap(), Value::from("hello Max"));
/// ```
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    /// Wraps a closure.
    pub fn new<F>(callable: F) -> Self
        where F: Fn(&Object) -> ValueResult<Value> + Send + Sync + 'static
    {
        Self(Arc::new(callable))
    }

    /// Invokes the closure with `args`.
    ///
    /// # Errors
    /// Propagates whatever error the closure returns.
    pub fn call(&self, args: &Object) -> ValueResult<Value> {
        (self.0)(args)
    }

    /// Returns `true` if both functions share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared closure, used to order functions.
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:#x})", self.address())
    }
}
