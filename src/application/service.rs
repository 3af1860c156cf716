use crate::domain::model::book::{Book, Library, Statistics};
use crate::domain::repository::LibraryRepository;

use super::error::AppError;

/// 蔵書に対するユースケース。プロセス存続中、Libraryを排他所有する。
/// 変更系は mutate → persist のパターンで操作する。
pub struct LibraryService<R: LibraryRepository> {
    repo: R,
    library: Library,
}

impl<R: LibraryRepository> LibraryService<R> {
    /// 起動時にリポジトリから蔵書を読み込んでServiceを構築する。
    /// ファイル欠損・破損は空の蔵書として始まる。
    pub fn open(repo: R) -> Result<Self, AppError> {
        let library = repo.load().map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(Self { repo, library })
    }

    /// 蔵書を追加して永続化する。
    /// 保存に失敗してもメモリ上の追加は有効なまま（呼び出し側が報告して続行できる）。
    pub fn add_book(&mut self, book: Book) -> Result<(), AppError> {
        self.library.add(book);
        self.persist()
    }

    /// タイトル一致（大文字小文字無視）の先頭1冊を削除する。
    /// 一致なしならOk(false)で、保存もしない。
    pub fn remove_book(&mut self, title: &str) -> Result<bool, AppError> {
        if !self.library.remove(title) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// タイトル・著者の部分一致検索。読み取り専用。
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        self.library.search(keyword)
    }

    /// 全蔵書を挿入順で返す。
    pub fn books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn statistics(&self) -> Statistics {
        self.library.statistics()
    }

    /// 終了時の最終保存。
    pub fn save(&self) -> Result<(), AppError> {
        self.persist()
    }

    // --- private ---

    fn persist(&self) -> Result<(), AppError> {
        self.repo
            .save(&self.library)
            .map_err(|e| AppError::Storage(Box::new(e)))
    }
}
