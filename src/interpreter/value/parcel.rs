use std::{any::Any, fmt, rc::Rc};

/// A reference to an object owned by a command module.
///
/// The interpreter stores, copies and compares parcels but never inspects
/// them. Two parcels are equal only when they refer to the same object.
#[derive(Clone)]
pub struct Parcel(Rc<dyn Any>);

impl Parcel {
    /// Wraps an object so it can travel through Logo values.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::value::parcel::Parcel;
    ///
    /// let parcel = Parcel::new(42_u32);
    /// assert_eq!(parcel.downcast_ref::<u32>(), Some(&42));
    /// assert!(parcel.downcast_ref::<String>().is_none());
    /// ```
    pub fn new<T: Any>(object: T) -> Self {
        Self(Rc::new(object))
    }

    /// Borrows the wrapped object if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for Parcel {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parcel(..)")
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<parcel>")
    }
}
