use crate::{
    descriptor::{
        core::{ArrayDescriptor, DescriptorResult, Field, ObjectDescriptor},
        element::Element,
    },
    error::DescriptorError,
};

impl ObjectDescriptor {
    /// Looks up a field's element by name.
    ///
    /// Scans the fields in order and returns the first whose name matches.
    ///
    /// # Parameters
    /// - `name`: The field name.
    ///
    /// # Returns
    /// A `DescriptorResult` holding the element of the first matching field.
    ///
    /// # Errors
    /// Returns [`DescriptorError::UnknownField`] if no field has that name.
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::{core::ObjectDescriptor, element::Element};
    ///
    /// let record = ObjectDescriptor::new().with("a", 1i64).with("a", 2i64);
    ///
    /// assert_eq!(record.get("a").unwrap(), &Element::Integer(1));
    /// assert!(record.get("b").is_err());
    /// ```
    pub fn get(&self, name: &str) -> DescriptorResult<&Element> {
        self.position(name)
            .map(|index| self.fields[index].element())
            .ok_or_else(|| DescriptorError::UnknownField { name: name.to_owned() })
    }

    /// Index of the first field named `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns the element of the field at `index`.
    ///
    /// # Errors
    /// Returns [`DescriptorError::IndexOutOfBounds`] if `index` is not below
    /// [`ObjectDescriptor::len`].
    pub fn get_at(&self, index: usize) -> DescriptorResult<&Element> {
        self.field_at(index).map(Field::element)
    }

    /// Returns the whole field at `index`.
    ///
    /// # Errors
    /// Returns [`DescriptorError::IndexOutOfBounds`] if `index` is not below
    /// [`ObjectDescriptor::len`].
    pub fn field_at(&self, index: usize) -> DescriptorResult<&Field> {
        self.fields.get(index).ok_or(DescriptorError::IndexOutOfBounds { len:   self.len(),
                                                                          found: index, })
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the descriptor has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in order.
    pub fn fields(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl ArrayDescriptor {
    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`DescriptorError::IndexOutOfBounds`] if `index` is not below
    /// [`ArrayDescriptor::len`].
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::{core::ArrayDescriptor, element::Element};
    ///
    /// let array: ArrayDescriptor = [1i64, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(array.get_at(2).unwrap(), &Element::Integer(3));
    /// assert!(array.get_at(3).is_err());
    /// ```
    pub fn get_at(&self, index: usize) -> DescriptorResult<&Element> {
        self.elements.get(index).ok_or(DescriptorError::IndexOutOfBounds { len:   self.len(),
                                                                            found: index, })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the descriptor has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn elements(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}
