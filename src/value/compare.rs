use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    util::{num::cmp_i64_f64, parse::text_to_number},
    value::core::Value,
};

impl PartialEq for Value {
    /// Strict equality: identical kind and identical value.
    ///
    /// `Integer(1)` and `Float(1.0)` are different, `NaN` is unequal to
    /// itself, arrays and objects compare element by element and functions
    /// compare by identity.
    fn eq(&self, other: &Self) -> bool {
        use Value::{Array, Boolean, Float, Function, Integer, Null, Object, String, Undefined};

        match (self, other) {
            (Undefined, Undefined) | (Null, Null) => true,
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,
            (Function(a), Function(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Consistent with `==`: equal values compare `Equal`, values that
    /// [`Value::compare`] ties but `==` separates (NaN) are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

/// Numeric view of a value for cross-kind comparison.
enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(Self::Integer(*i)),
            Value::Boolean(b) => Some(Self::Integer(i64::from(*b))),
            Value::Float(f) => Some(Self::Float(*f)),
            _ => None,
        }
    }

    /// Total numeric order with NaN above every number.
    fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Self::Integer(a), Self::Float(b)) => cmp_i64_f64(*a, *b).unwrap_or(Ordering::Less),
            (Self::Float(a), Self::Integer(b)) => {
                cmp_i64_f64(*b, *a).map_or(Ordering::Greater, Ordering::reverse)
            },
        }
    }

    /// IEEE equality across the two representations.
    fn numeric_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(i), Self::Float(f)) | (Self::Float(f), Self::Integer(i)) => {
                cmp_i64_f64(*i, *f) == Some(Ordering::Equal)
            },
        }
    }
}

impl Value {
    /// JavaScript abstract (loose) equality, `==` in JavaScript.
    ///
    /// - numbers and booleans compare numerically across kinds;
    /// - a string against a number or boolean is parsed first (blank text is
    ///   `0`, unparsable text never matches);
    /// - `null` and `undefined` equal each other and nothing else;
    /// - otherwise both sides must have the same kind and compare strictly.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// assert!(Value::from(1).loose_eq(&Value::from("1")));
    /// assert!(Value::from(1).loose_eq(&Value::from(1.0)));
    /// assert!(Value::from(true).loose_eq(&Value::from(1)));
    /// assert!(Value::Null.loose_eq(&Value::Undefined));
    /// assert!(!Value::Null.loose_eq(&Value::from(0)));
    /// assert!(!Value::from(f64::NAN).loose_eq(&Value::from(f64::NAN)));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        use Value::{Null, String, Undefined};

        match (self, other) {
            (Undefined | Null, Undefined | Null) => true,
            (Undefined | Null, _) | (_, Undefined | Null) => false,
            (String(a), String(b)) => a == b,
            (String(text), number) | (number, String(text)) => {
                Numeric::of(number).is_some_and(|n| {
                                       n.numeric_eq(&Numeric::Float(text_to_number(text)))
                                   })
            },
            _ => match (Numeric::of(self), Numeric::of(other)) {
                (Some(a), Some(b)) => a.numeric_eq(&b),
                _ => self == other,
            },
        }
    }

    /// Strict equality, `===` in JavaScript. Same as `==` on [`Value`].
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Total, value-aware ordering.
    ///
    /// Numbers and booleans are ordered numerically, with `NaN` above every
    /// number and ties between kinds broken by kind (`1 < 1.0`). Strings order
    /// lexicographically, arrays element by element, objects field by field
    /// (name, then value), functions by identity. Values of otherwise
    /// unrelated kinds order by kind rank.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use dynvar::{array, value::core::Value};
    ///
    /// assert_eq!(Value::from(2).compare(&Value::from(10.5)), Ordering::Less);
    /// assert_eq!(Value::from("b").compare(&Value::from("a")), Ordering::Greater);
    /// assert_eq!(array![1, 2].compare(&array![1, 3]), Ordering::Less);
    /// assert_eq!(Value::Null.compare(&Value::from(0)), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        use Value::{Array, Function, Object, String};

        if let (Some(a), Some(b)) = (Numeric::of(self), Numeric::of(other)) {
            return a.total_cmp(&b).then_with(|| self.kind().cmp(&other.kind()));
        }

        match (self, other) {
            (String(a), String(b)) => a.cmp(b),
            (Array(a), Array(b)) => {
                a.iter()
                 .zip(b.iter())
                 .map(|(x, y)| x.compare(y))
                 .find(|ordering| ordering.is_ne())
                 .unwrap_or_else(|| a.len().cmp(&b.len()))
            },
            (Object(a), Object(b)) => {
                a.iter()
                 .zip(b.iter())
                 .map(|((name_a, x), (name_b, y))| name_a.cmp(name_b).then_with(|| x.compare(y)))
                 .find(|ordering| ordering.is_ne())
                 .unwrap_or_else(|| a.len().cmp(&b.len()))
            },
            (Function(a), Function(b)) => a.address().cmp(&b.address()),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}
