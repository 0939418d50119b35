//! Core types for the Shelf book list

mod book;

pub use book::{BookList, BookRecord};
