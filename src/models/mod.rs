pub mod book;

pub use book::{Book, BookView, Borrower, NewBook};
