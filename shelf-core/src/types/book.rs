//! Book records and the wire document that carries them

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single book as served by the books endpoint
///
/// Records have no id; identity is their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub publication_year: i32,
}

/// Accept any JSON number with an integral value that fits in an `i32`,
/// so `1815` and `1815.0` read the same
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integral publication year")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
                Ok(v as i32)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

impl BookRecord {
    /// Create a new book record
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
        }
    }
}

/// The JSON document returned by the books endpoint: `{ "books": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<BookRecord>,
}

impl BookList {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<Vec<BookRecord>> for BookList {
    fn from(books: Vec<BookRecord>) -> Self {
        Self { books }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_year() {
        let json = serde_json::to_value(BookRecord::new("Emma", "Jane Austen", 1815)).unwrap();
        assert_eq!(json["publicationYear"], 1815);
        assert!(json.get("publication_year").is_none());
    }

    #[test]
    fn test_integral_float_year() {
        let book: BookRecord = serde_json::from_str(
            r#"{"title":"Emma","author":"Jane Austen","publicationYear":1815.0}"#,
        )
        .unwrap();
        assert_eq!(book.publication_year, 1815);
    }

    #[test]
    fn test_fractional_year_is_rejected() {
        let result: Result<BookRecord, _> = serde_json::from_str(
            r#"{"title":"Emma","author":"Jane Austen","publicationYear":1815.5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_book_list_deserialization() {
        let list: BookList = serde_json::from_str(
            r#"{"books":[{"title":"Da Vinci Code","author":"Dan Brown","publicationYear":2003}]}"#,
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.books[0].author, "Dan Brown");
        assert_eq!(list.books[0].publication_year, 2003);
    }
}
