use bibliocatalog::domain::{Catalog, CatalogError};
use bibliocatalog::models::Book;

fn dune() -> Book {
    Book::new("Dune", "Herbert", 1965, "111")
}

#[test]
fn test_add_until_full() {
    let mut catalog = Catalog::new(1);

    assert!(catalog.add(dune()).is_ok());
    assert_eq!(catalog.len(), 1);

    let result = catalog.add(Book::new("X", "Y", 2000, "222"));
    assert_eq!(result, Err(CatalogError::CapacityExceeded { capacity: 1 }));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().title(), "Dune");
}

#[test]
fn test_added_fields_are_preserved() {
    let mut catalog = Catalog::new(3);
    for (i, book) in [
        dune(),
        Book::new("Emma", "Austen", 1815, "222"),
        Book::new("Beloved", "Morrison", 1987, "333"),
    ]
    .into_iter()
    .enumerate()
    {
        let expected = book.clone();
        catalog.add(book).unwrap();
        assert_eq!(catalog.len(), i + 1);

        let stored = catalog.get(i).unwrap();
        assert_eq!(stored.title(), expected.title());
        assert_eq!(stored.author(), expected.author());
        assert_eq!(stored.publication_year(), expected.publication_year());
        assert_eq!(stored.isbn(), expected.isbn());
    }
}

#[test]
fn test_search_matches_title_or_author_ignoring_case() {
    let mut catalog = Catalog::new(10);
    catalog.add(dune()).unwrap();

    let by_title: Vec<String> = catalog.search("dune").unwrap().map(Book::describe).collect();
    assert_eq!(by_title.len(), 1);
    assert!(by_title[0].contains("Checked Out: No"));
    assert!(!by_title[0].contains("Borrower"));

    assert_eq!(catalog.search("HERBERT").unwrap().count(), 1);
    assert!(matches!(catalog.search("Asimov"), Err(CatalogError::NotFound)));
}

#[test]
fn test_checkout_and_return_cycle() {
    let mut catalog = Catalog::new(10);
    catalog.add(dune()).unwrap();

    let book = catalog.check_out_book("Dune", "Alice", "alice@x.com").unwrap();
    assert!(book.is_checked_out());
    assert_eq!(book.borrower_name(), "Alice");
    assert_eq!(book.borrower_contact(), "alice@x.com");

    assert_eq!(
        catalog
            .check_out_book("Dune", "Bob", "bob@x.com")
            .map(|b| b.borrower_name().to_string()),
        Err(CatalogError::Unavailable)
    );
    assert_eq!(catalog.get(0).unwrap().borrower_name(), "Alice");

    let book = catalog.return_book("Dune").unwrap();
    assert!(!book.is_checked_out());
    assert_eq!(book.borrower_name(), "");
    assert_eq!(book.borrower_contact(), "");

    assert_eq!(
        catalog.return_book("Dune").map(|b| b.isbn().to_string()),
        Err(CatalogError::NotFoundOrNotCheckedOut)
    );

    // The item cycles back to available and can be lent again
    assert!(catalog.check_out_book("dune", "Carol", "c@x").is_ok());
}

#[test]
fn test_list_all_on_fresh_catalog_is_empty_signal() {
    let catalog = Catalog::new(5);
    assert!(matches!(catalog.list_all(), Err(CatalogError::Empty)));
}

#[test]
fn test_failures_leave_catalog_untouched() {
    let mut catalog = Catalog::new(1);
    catalog.add(dune()).unwrap();
    let before = catalog.clone();

    let _ = catalog.add(Book::new("X", "Y", 2000, "222"));
    let _ = catalog.return_book("Dune");
    let _ = catalog.check_out_book("Missing", "Alice", "a@x");

    let after: Vec<&Book> = catalog.iter().collect();
    let before: Vec<&Book> = before.iter().collect();
    assert_eq!(after, before);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CatalogError::CapacityExceeded { capacity: 10 }.to_string(),
        "Library is full. Cannot add more books."
    );
    assert_eq!(CatalogError::NotFound.to_string(), "Book not found.");
    assert_eq!(
        CatalogError::Unavailable.to_string(),
        "Book not available for checkout."
    );
    assert_eq!(
        CatalogError::NotFoundOrNotCheckedOut.to_string(),
        "Book not found or already returned."
    );
    assert_eq!(CatalogError::Empty.to_string(), "Library catalog is empty.");
}
