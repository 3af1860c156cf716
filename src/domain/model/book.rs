use serde::{Deserialize, Serialize};

/// 蔵書1冊分のレコード。タイトルは検索キーだが一意性は要求しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

/// 蔵書統計。percent_readは丸めない生値（表示側で小数1桁に整形する）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub percent_read: f64,
}

/// Library — 集約ルート。蔵書の追加・削除・検索はここを経由する。
/// 挿入順 = 表示順。永続化形式は素のJSON配列（transparent）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 末尾に追加する。常に成功する。
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// タイトルが大文字小文字無視で一致する最初の1冊を削除する。
    /// 一致なしなら変更せずfalseを返す。
    pub fn remove(&mut self, title: &str) -> bool {
        let target = title.to_lowercase();
        match self
            .books
            .iter()
            .position(|b| b.title.to_lowercase() == target)
        {
            Some(pos) => {
                self.books.remove(pos);
                true
            }
            None => false,
        }
    }

    /// タイトルまたは著者にkeywordを含む蔵書を挿入順で返す（大文字小文字無視）。
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&keyword)
                    || b.author.to_lowercase().contains(&keyword)
            })
            .collect()
    }

    /// 総冊数と既読率。空なら0.0%（ゼロ除算回避）。
    pub fn statistics(&self) -> Statistics {
        let total = self.books.len();
        let read_count = self.books.iter().filter(|b| b.read).count();
        let percent_read = if total > 0 {
            read_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Statistics {
            total,
            percent_read,
        }
    }
}
