use std::io::{self, BufRead};

use logos::Logos;

use crate::value::core::Value;

/// Shapes recognized by the line classifier.
///
/// A line only becomes a number when a single token spans all of it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Shape {
    /// Optional minus followed by digits, such as `-42`.
    #[regex(r"-?[0-9]+")]
    Integer,
    /// Optional minus, digits and exactly one decimal point, such as `10.5`,
    /// `3.` or `-.5`.
    #[regex(r"-?[0-9]+\.[0-9]*")]
    #[regex(r"-?\.[0-9]+")]
    Float,
}

impl Value {
    /// Classifies one line of text.
    ///
    /// This is a best-effort heuristic, not an exact parser: an optional minus
    /// and digits make an integer (a float if it overflows `i64`), the same
    /// with one decimal point make a float, and anything else is kept as a
    /// string. A trailing line break is ignored; surrounding spaces are not.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// assert_eq!(Value::parse_input("-42"), Value::Integer(-42));
    /// assert_eq!(Value::parse_input("10.5\n"), Value::Float(10.5));
    /// assert_eq!(Value::parse_input("1.2.3"), Value::from("1.2.3"));
    /// assert_eq!(Value::parse_input(" 7"), Value::from(" 7"));
    /// ```
    #[must_use]
    pub fn parse_input(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut lexer = Shape::lexer(line);
        let first = lexer.next();
        let spans_line = lexer.span() == (0..line.len()) && lexer.next().is_none();

        match first {
            Some(Ok(Shape::Integer)) if spans_line => match line.parse::<i64>() {
                Ok(i) => Self::Integer(i),
                Err(_) => line.parse::<f64>().map_or_else(|_| Self::from(line), Self::Float),
            },
            Some(Ok(Shape::Float)) if spans_line => {
                line.parse::<f64>().map_or_else(|_| Self::from(line), Self::Float)
            },
            _ => Self::from(line),
        }
    }

    /// Reads one line from `reader` and classifies it with
    /// [`Value::parse_input`].
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Propagates I/O errors from the reader.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use dynvar::value::core::Value;
    ///
    /// let mut input = Cursor::new("5\nmama\n");
    ///
    /// assert_eq!(Value::read_line(&mut input).unwrap(), Some(Value::Integer(5)));
    /// assert_eq!(Value::read_line(&mut input).unwrap(), Some(Value::from("mama")));
    /// assert_eq!(Value::read_line(&mut input).unwrap(), None);
    /// ```
    pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Self>> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(Self::parse_input(&line)))
    }
}
