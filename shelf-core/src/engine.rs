//! Search and sort over book lists

use crate::types::BookRecord;
use std::fmt;
use std::str::FromStr;

/// Publication-year ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Ascending,
    /// Newest first
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "oldest" => Ok(Self::Ascending),
            "desc" | "descending" | "newest" => Ok(Self::Descending),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

/// Whether `book` matches an already-lowercased needle by title or author
pub fn matches(book: &BookRecord, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle) || book.author.to_lowercase().contains(needle)
}

/// Keep the records whose title or author contains `query`, ignoring case
///
/// An empty query keeps everything. Relative order is preserved.
pub fn search(books: &[BookRecord], query: &str) -> Vec<BookRecord> {
    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| matches(book, &needle))
        .cloned()
        .collect()
}

/// Sort in place by publication year
///
/// Books sharing a year keep their current relative order.
pub fn sort_by_year(books: &mut [BookRecord], order: SortOrder) {
    match order {
        SortOrder::Ascending => books.sort_by(|a, b| a.publication_year.cmp(&b.publication_year)),
        SortOrder::Descending => books.sort_by(|a, b| b.publication_year.cmp(&a.publication_year)),
    }
}

/// Sorted copy of `books`
pub fn sorted_by_year(books: &[BookRecord], order: SortOrder) -> Vec<BookRecord> {
    let mut sorted = books.to_vec();
    sort_by_year(&mut sorted, order);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<BookRecord> {
        vec![
            BookRecord::new("Da Vinci Code", "Dan Brown", 2003),
            BookRecord::new("Emma", "Jane Austen", 1815),
        ]
    }

    fn years(books: &[BookRecord]) -> Vec<i32> {
        books.iter().map(|b| b.publication_year).collect()
    }

    fn titles(books: &[BookRecord]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_search_by_title_ignores_case() {
        let books = sample();
        assert_eq!(search(&books, "da vinci"), vec![books[0].clone()]);
        assert_eq!(search(&books, "DA VincI"), vec![books[0].clone()]);
        assert_eq!(search(&books, "Da Vinci"), vec![books[0].clone()]);
    }

    #[test]
    fn test_search_by_author() {
        let books = sample();
        assert_eq!(search(&books, "austen"), vec![books[1].clone()]);
    }

    #[test]
    fn test_search_substring_not_whole_word() {
        let books = sample();
        assert_eq!(search(&books, "mm"), vec![books[1].clone()]);
        // "an" appears in "Dan Brown" and "Jane Austen"
        assert_eq!(search(&books, "an").len(), 2);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search(&sample(), "tolkien").is_empty());
    }

    #[test]
    fn test_search_empty_query_keeps_all() {
        assert_eq!(search(&sample(), ""), sample());
    }

    #[test]
    fn test_search_treats_regex_characters_literally() {
        let books = vec![BookRecord::new("C++ (3rd ed.)", "Bjarne Stroustrup", 1997)];
        assert_eq!(search(&books, "c++ (").len(), 1);
        assert!(search(&books, "c.*").is_empty());
    }

    #[test]
    fn test_sort_ascending() {
        assert_eq!(years(&sorted_by_year(&sample(), SortOrder::Ascending)), vec![1815, 2003]);
    }

    #[test]
    fn test_sort_descending() {
        assert_eq!(years(&sorted_by_year(&sample(), SortOrder::Descending)), vec![2003, 1815]);
    }

    #[test]
    fn test_sort_ties_keep_current_order() {
        let books = vec![
            BookRecord::new("A", "x", 2000),
            BookRecord::new("B", "x", 1990),
            BookRecord::new("C", "x", 2000),
        ];

        let ascending = sorted_by_year(&books, SortOrder::Ascending);
        assert_eq!(titles(&ascending), vec!["B", "A", "C"]);

        let descending = sorted_by_year(&ascending, SortOrder::Descending);
        assert_eq!(titles(&descending), vec!["A", "C", "B"]);

        // Round trip does not restore the original A, B, C
        assert_ne!(descending, books);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("Newest".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
