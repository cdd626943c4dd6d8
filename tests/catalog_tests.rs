//! Catalog integration tests against a JSON file on disk

use elidune_shelf::{
    models::{BookStatus, NewBook},
    repository::{BookStore, JsonBookStore, Repository},
    services::catalog::CatalogService,
    AppError,
};

fn open(path: &std::path::Path) -> CatalogService {
    CatalogService::open(Box::new(JsonBookStore::new(path)), 12).with_max_year(2024)
}

fn master() -> NewBook {
    NewBook::new("Мастер и Маргарита", "Михаил Афанасьевич Булгаков", 1967)
}

#[test]
fn test_add_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");

    let mut catalog = open(&path);
    let id = catalog.add_book(master()).unwrap().id;
    assert_eq!(id, 13);

    let stored = JsonBookStore::new(&path).load();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 13);
    assert_eq!(stored[0].status, BookStatus::Available);
}

#[test]
fn test_reopen_sees_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");

    {
        let mut catalog = open(&path);
        catalog.add_book(master()).unwrap();
        catalog
            .add_book(NewBook::new("Братья Карамазовы", "Федор Достоевский", 1880))
            .unwrap();
        catalog
            .add_book(NewBook::new("Dune", "Frank Herbert", 1965))
            .unwrap();
        catalog.update_status(14, BookStatus::Issued).unwrap();
        catalog.delete_book(13).unwrap();
    }

    let catalog = open(&path);
    let books = catalog.list_books();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, 14);
    assert_eq!(books[0].status, BookStatus::Issued);
    assert_eq!(books[1].title, "Dune");
}

#[test]
fn test_add_then_delete_restores_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = open(&dir.path().join("database.json"));
    catalog.add_book(master()).unwrap();
    let before = catalog.len();

    let id = catalog
        .add_book(NewBook::new("Dune", "Frank Herbert", 1965))
        .unwrap()
        .id;
    assert_eq!(catalog.len(), before + 1);

    let removed = catalog.delete_book(id).unwrap();
    assert_eq!(removed.title, "Dune");
    assert_eq!(catalog.len(), before);
    assert!(catalog.get_book(id).is_err());
}

#[test]
fn test_rejected_add_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    let mut catalog = open(&path);

    let err = catalog
        .add_book(NewBook::new("Оно", "Стивен Кинг", 1986))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(catalog.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_search_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    open(&path).add_book(master()).unwrap();

    let catalog = open(&path);
    let found = catalog.search_books("Мастер").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].author, "Михаил Афанасьевич Булгаков");
}

#[test]
fn test_malformed_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    std::fs::write(&path, "not a catalog").unwrap();

    let mut catalog = open(&path);
    assert!(catalog.is_empty());
    assert_eq!(catalog.add_book(master()).unwrap().id, 13);
}

#[test]
fn test_repository_uses_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    let repository = Repository::new(&path);
    repository.books.save(&[]).unwrap();
    assert!(path.exists());
    assert!(repository.books.load().is_empty());
}
