//! Type-erased value payload carried by value nodes

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value of some caller-chosen type, stored behind a type tag
///
/// The payload is reference-counted so that shallow node clones on the
/// rebuild path share it instead of copying it. Typed access always goes
/// through a tag check; asking for the wrong type yields `None`.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wrap a value, taking ownership of it
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Value {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Check if the payload is a `T`
    pub fn is<T: Any>(&self) -> bool {
        (*self.inner).is::<T>()
    }

    /// Borrow the payload as a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Get a shared handle to the payload as a `T`
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Name of the type the payload was stored as
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value<{}>", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_downcast() {
        let v = Value::new(42u32);
        assert!(v.is::<u32>());
        assert!(!v.is::<u64>());
        assert_eq!(v.downcast_ref::<u32>(), Some(&42));
        assert_eq!(v.downcast_ref::<i32>(), None);
        assert_eq!(v.type_name(), "u32");
    }

    #[test]
    fn test_value_downcast_arc() {
        let v = Value::new(String::from("hello"));
        let shared = v.downcast_arc::<String>().unwrap();
        assert_eq!(shared.as_str(), "hello");
        assert!(v.downcast_arc::<&str>().is_none());
    }

    #[test]
    fn test_value_clone_shares_payload() {
        let v = Value::new(vec![1u8, 2, 3]);
        let w = v.clone();
        assert!(v.ptr_eq(&w));
        assert!(!v.ptr_eq(&Value::new(vec![1u8, 2, 3])));
    }

    #[test]
    fn test_value_accepts_non_clone_types() {
        struct MoveOnly(Box<u32>);

        let v = Value::new(MoveOnly(Box::new(7)));
        assert_eq!(*v.downcast_ref::<MoveOnly>().unwrap().0, 7);
    }
}
