use super::model::book::Library;

/// 永続化の抽象。Infra層が実装する。
///
/// loadの契約: ファイル欠損・破損は空のLibraryとして回復し、
/// エラーにしない。Errを返すのは純粋なI/O失敗のみ。
pub trait LibraryRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Result<Library, Self::Error>;
    fn save(&self, library: &Library) -> Result<(), Self::Error>;
}
