use std::borrow::Cow;

use crate::{descriptor::element::Element, error::DescriptorError};

/// Result type used by descriptor construction and lookup.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// A named element.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name:    Cow<'static, str>,
    element: Element,
}

impl Field {
    /// Pairs a name with an element.
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::{core::Field, element::Element};
    ///
    /// let field = Field::new("num", 5);
    ///
    /// assert_eq!(field.name(), "num");
    /// assert_eq!(field.element(), &Element::Integer(5));
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>, element: impl Into<Element>) -> Self {
        Self { name:    name.into(),
               element: element.into(), }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Splits the field into its name and element.
    #[must_use]
    pub fn into_parts(self) -> (Cow<'static, str>, Element) {
        (self.name, self.element)
    }
}

/// An ordered list of untagged elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayDescriptor {
    pub(crate) elements: Vec<Element>,
}

impl ArrayDescriptor {
    /// Creates an empty array descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Returns the descriptor grown by one element.
    #[must_use]
    pub fn with(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }
}

impl<E: Into<Element>> FromIterator<E> for ArrayDescriptor {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self { elements: iter.into_iter().map(Into::into).collect() }
    }
}

/// An ordered list of fields. Names need not be unique; lookups return the
/// first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectDescriptor {
    pub(crate) fields: Vec<Field>,
}

impl ObjectDescriptor {
    /// Creates an empty object descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns the descriptor grown by one field.
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::{core::ObjectDescriptor, data_type::DataType};
    ///
    /// let record = ObjectDescriptor::new().with("type", DataType::Integer).with("len", 8i64);
    /// assert_eq!(record.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, element: impl Into<Element>) -> Self {
        self.fields.push(Field::new(name, element));
        self
    }

    /// Consumes the descriptor, yielding its fields in order.
    #[must_use]
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

impl FromIterator<Field> for ObjectDescriptor {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

/// A node that can be appended to a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A named field. Only objects accept it.
    Field(Field),
    /// An untagged element. Only arrays accept it.
    Value(Element),
}

impl Node {
    const fn name(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Value(_) => "value",
        }
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Value(element)
    }
}

/// Any of the three descriptor kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// A single named element.
    Field(Field),
    /// Ordered untagged elements.
    Array(ArrayDescriptor),
    /// Ordered fields.
    Object(ObjectDescriptor),
}

impl Descriptor {
    /// Lowercase name of the descriptor kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Appends a node and returns the grown descriptor.
    ///
    /// A field may only be appended to an object and an untagged value only
    /// to an array. Field descriptors accept nothing.
    ///
    /// # Errors
    /// Returns [`DescriptorError::AppendMismatch`] for any other pairing.
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::{
    ///     core::{ArrayDescriptor, Descriptor, Field, Node},
    ///     element::Element,
    /// };
    ///
    /// let array = Descriptor::Array(ArrayDescriptor::new());
    /// let array = array.append(Node::Value(Element::Integer(1))).unwrap();
    /// assert_eq!(array.len(), 1);
    ///
    /// assert!(array.append(Node::Field(Field::new("x", 1))).is_err());
    /// ```
    pub fn append(self, node: Node) -> DescriptorResult<Self> {
        match (self, node) {
            (Self::Object(mut object), Node::Field(field)) => {
                object.fields.push(field);
                Ok(Self::Object(object))
            },
            (Self::Array(mut array), Node::Value(element)) => {
                array.elements.push(element);
                Ok(Self::Array(array))
            },
            (descriptor, node) => {
                Err(DescriptorError::AppendMismatch { descriptor: descriptor.kind_name(),
                                                      node:       node.name(), })
            },
        }
    }

    /// Number of fields or elements. A field descriptor counts as one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Field(_) => 1,
            Self::Array(array) => array.len(),
            Self::Object(object) => object.len(),
        }
    }

    /// Returns `true` if an array or object descriptor has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Field> for Descriptor {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<ArrayDescriptor> for Descriptor {
    fn from(array: ArrayDescriptor) -> Self {
        Self::Array(array)
    }
}

impl From<ObjectDescriptor> for Descriptor {
    fn from(object: ObjectDescriptor) -> Self {
        Self::Object(object)
    }
}
