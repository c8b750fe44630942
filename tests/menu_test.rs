use bibliocatalog::api::menu::Menu;
use bibliocatalog::domain::CatalogRepository;
use bibliocatalog::infrastructure::InMemoryCatalogRepository;

// Helper to drive the menu with scripted input and capture what it printed
async fn run_script(repo: &InMemoryCatalogRepository, input: &str) -> String {
    let mut output: Vec<u8> = Vec::new();
    Menu::new(repo, input.as_bytes(), &mut output)
        .run()
        .await
        .expect("Menu failed");
    String::from_utf8(output).expect("Menu output is not UTF-8")
}

#[tokio::test]
async fn test_full_session() {
    let repo = InMemoryCatalogRepository::new(10);
    let script = "\
1\nDune\nHerbert\n1965\n111\n\
2\ndune\n\
3\nDune\nAlice\nalice@x.com\n\
3\nDune\nBob\nbob@x.com\n\
5\n\
4\nDune\n\
4\nDune\n\
6\n";

    let out = run_script(&repo, script).await;

    assert!(out.contains("Library System Menu:"));
    assert!(out.contains("Book added successfully."));
    assert!(out.contains("Title: Dune\nAuthor: Herbert\nPublication Year: 1965\nISBN: 111\nChecked Out: No\n"));
    assert!(out.contains("Book checked out successfully."));
    assert!(out.contains("Book not available for checkout."));
    assert!(out.contains(
        "Library Catalog:\nTitle: Dune\nAuthor: Herbert\nPublication Year: 1965\nISBN: 111\n\
Checked Out: Yes\nBorrower Name: Alice\nBorrower Contact: alice@x.com\n------------------------\n"
    ));
    assert!(out.contains("Book returned successfully."));
    assert!(out.contains("Book not found or already returned."));
    assert!(out.trim_end().ends_with("Exiting..."));

    let stats = repo.stats().await;
    assert_eq!(stats.total, 1);
    assert_eq!(stats.checked_out, 0);
}

#[tokio::test]
async fn test_invalid_choices_keep_the_loop_alive() {
    let repo = InMemoryCatalogRepository::new(10);
    let out = run_script(&repo, "9\nabc\n5\n6\n").await;

    assert_eq!(
        out.matches("Invalid choice. Please enter a number between 1 and 6.")
            .count(),
        2
    );
    assert!(out.contains("Library catalog is empty."));
    assert!(out.contains("Exiting..."));
}

#[tokio::test]
async fn test_bad_year_is_asked_again() {
    let repo = InMemoryCatalogRepository::new(10);
    let out = run_script(&repo, "1\nEmma\nAusten\neighteen\n1815\n222\n6\n").await;

    assert!(out.contains("Invalid year. Please enter a whole number."));
    assert!(out.contains("Book added successfully."));

    let books = repo.list_all().await.unwrap();
    assert_eq!(books[0].publication_year(), 1815);
    assert_eq!(books[0].isbn(), "222");
}

#[tokio::test]
async fn test_full_catalog_and_missing_search() {
    let repo = InMemoryCatalogRepository::new(1);
    let script = "1\nDune\nHerbert\n1965\n111\n1\nX\nY\n2000\n222\n2\nNobody\n6\n";
    let out = run_script(&repo, script).await;

    assert!(out.contains("Library is full. Cannot add more books."));
    assert!(out.contains("Book not found."));
    assert_eq!(repo.stats().await.total, 1);
}

#[tokio::test]
async fn test_eof_ends_session_cleanly() {
    let repo = InMemoryCatalogRepository::new(10);
    // Input stops in the middle of adding a book
    let out = run_script(&repo, "1\nDune\n").await;

    assert!(out.contains("Enter author: "));
    assert!(!out.contains("Exiting..."));
    assert_eq!(repo.stats().await.total, 0);
}

#[tokio::test]
async fn test_windows_line_endings_are_stripped() {
    let repo = InMemoryCatalogRepository::new(10);
    let out = run_script(&repo, "1\r\nDune\r\nHerbert\r\n1965\r\n111\r\n2\r\nHERBERT\r\n6\r\n").await;

    assert!(out.contains("Title: Dune\n"));
    let books = repo.list_all().await.unwrap();
    assert_eq!(books[0].title(), "Dune");
}
