use crate::domain::CatalogRepository;
use crate::models::Book;

/// Add a few well-known books. Stops quietly once the catalog is full and
/// returns how many were stored.
pub async fn seed_demo_data(repo: &dyn CatalogRepository) -> usize {
    let books = [
        Book::new("Dune", "Frank Herbert", 1965, "9780441013593"),
        Book::new("Emma", "Jane Austen", 1815, "9780141439587"),
        Book::new("Middlemarch", "George Eliot", 1871, "9780141439549"),
        Book::new(
            "The Left Hand of Darkness",
            "Ursula K. Le Guin",
            1969,
            "9780441478125",
        ),
        Book::new("Beloved", "Toni Morrison", 1987, "9781400033416"),
    ];

    let mut added = 0;
    for book in books {
        let title = book.title().to_string();
        if let Err(e) = repo.add(book).await {
            tracing::info!("{} Skipping remaining demo data from '{}'", e, title);
            break;
        }
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryCatalogRepository;

    #[tokio::test]
    async fn test_seed_respects_capacity() {
        let repo = InMemoryCatalogRepository::new(2);
        assert_eq!(seed_demo_data(&repo).await, 2);
        assert_eq!(repo.stats().await.total, 2);

        let repo = InMemoryCatalogRepository::new(10);
        assert_eq!(seed_demo_data(&repo).await, 5);
    }
}
