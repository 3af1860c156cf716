//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use bookshelf::application::service::LibraryService;
use bookshelf::domain::model::book::{Book, Library};
use bookshelf::domain::repository::LibraryRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリリポジトリ。
pub struct InMemoryRepo {
    store: RefCell<Option<String>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            store: RefCell::new(None),
        }
    }

    /// 最後に保存されたJSON文字列。未保存ならNone。
    pub fn persisted(&self) -> Option<String> {
        self.store.borrow().clone()
    }
}

impl LibraryRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Library, Self::Error> {
        let store = self.store.borrow();
        match store.as_deref() {
            Some(json) => Ok(serde_json::from_str(json).unwrap()),
            None => Ok(Library::default()),
        }
    }

    fn save(&self, library: &Library) -> Result<(), Self::Error> {
        let json = serde_json::to_string(library).unwrap();
        *self.store.borrow_mut() = Some(json);
        Ok(())
    }
}

// 参照でもリポジトリとして使えるようにする（Service移動後もstoreを覗ける）。
impl LibraryRepository for &InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Library, Self::Error> {
        <InMemoryRepo as LibraryRepository>::load(self)
    }

    fn save(&self, library: &Library) -> Result<(), Self::Error> {
        <InMemoryRepo as LibraryRepository>::save(self, library)
    }
}

// =============================================================================
// FailingRepo — 保存が常に失敗するリポジトリ（save失敗時の挙動検証用）
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("disk full")]
pub struct DiskFullError;

/// loadは空で成功、saveは常に失敗する。
pub struct FailingRepo;

impl LibraryRepository for FailingRepo {
    type Error = DiskFullError;

    fn load(&self) -> Result<Library, Self::Error> {
        Ok(Library::default())
    }

    fn save(&self, _library: &Library) -> Result<(), Self::Error> {
        Err(DiskFullError)
    }
}

// =============================================================================
// TestLibrary — 定番の蔵書フィクスチャ
// =============================================================================

pub struct TestLibrary;

impl TestLibrary {
    /// 標準的なテスト用蔵書（4冊、うち2冊既読 → 50.0%）:
    /// ```text
    /// 1. Dune — Frank Herbert, 1965, Sci-Fi, read
    /// 2. Dune Messiah — Frank Herbert, 1969, Sci-Fi, unread
    /// 3. Nineteen Eighty-Four — George Orwell, 1949, Dystopia, read
    /// 4. The Left Hand of Darkness — Ursula K. Le Guin, 1969, Sci-Fi, unread
    /// ```
    pub fn standard_books() -> Vec<Book> {
        vec![
            book("Dune", "Frank Herbert", 1965, "Sci-Fi", true),
            book("Dune Messiah", "Frank Herbert", 1969, "Sci-Fi", false),
            book("Nineteen Eighty-Four", "George Orwell", 1949, "Dystopia", true),
            book(
                "The Left Hand of Darkness",
                "Ursula K. Le Guin",
                1969,
                "Sci-Fi",
                false,
            ),
        ]
    }

    pub fn standard() -> Library {
        let mut library = Library::new();
        for b in Self::standard_books() {
            library.add(b);
        }
        library
    }

    /// InMemoryRepoにLibraryを保存してServiceを返す。
    pub fn service_with_library(library: &Library) -> LibraryService<InMemoryRepo> {
        let repo = InMemoryRepo::new();
        repo.save(library).unwrap();
        LibraryService::open(repo).unwrap()
    }
}

pub fn book(title: &str, author: &str, year: i32, genre: &str, read: bool) -> Book {
    Book {
        title: title.into(),
        author: author.into(),
        year,
        genre: genre.into(),
        read,
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
#[allow(dead_code)]
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
