//! Interactive menu for bookshelf
//!
//! stdin/stdout read-eval loop <-> application::LibraryService
//!
//! 6 choices: add, remove, search, display, statistics, exit

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::application::error::AppError;
use crate::application::service::LibraryService;
use crate::domain::model::book::{Book, Statistics};
use crate::domain::repository::LibraryRepository;
use crate::infra::json_store::JsonLibraryRepository;

const MENU: &str = "\nMenu:
1. Add Book
2. Remove Book
3. Search Book
4. Display Books
5. Statistics
6. Exit";

// =============================================================================
// Public entry point
// =============================================================================

/// メニューループを起動する。library_pathは蔵書JSONファイル。
pub fn run(library_path: PathBuf) -> anyhow::Result<()> {
    let repo = JsonLibraryRepository::new(library_path);
    let mut service = LibraryService::open(repo)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(&mut service, &mut stdin.lock(), &mut stdout.lock())
}

/// 読み取り・評価ループ本体。入出力を差し替え可能にしてある。
/// 選択肢6またはEOFで最終保存して抜ける。
pub fn run_loop<R: LibraryRepository>(
    service: &mut LibraryService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Enter choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_book(service, input, out)?,
            "2" => remove_book(service, input, out)?,
            "3" => search_books(service, input, out)?,
            "4" => writeln!(out, "{}\n", render_listing(service.books()))?,
            "5" => writeln!(out, "{}\n", render_statistics(service.statistics()))?,
            "6" => break,
            _ => writeln!(out, "Invalid choice, try again.\n")?,
        }
    }

    // 終了時の最終保存。失敗は報告のみ（メモリ上の蔵書は正しいまま）。
    if let Err(e) = service.save() {
        writeln!(out, "Failed to save library: {e}")?;
    }
    writeln!(out, "Goodbye!")?;
    Ok(())
}

// =============================================================================
// Menu actions
// =============================================================================

fn add_book<R: LibraryRepository>(
    service: &mut LibraryService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(title) = prompt(input, out, "Enter book title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, out, "Enter author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt_year(input, out)? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, out, "Enter genre: ")? else {
        return Ok(());
    };
    let Some(answer) = prompt(input, out, "Have you read it? (yes/no): ")? else {
        return Ok(());
    };

    let book = Book {
        title,
        author,
        year,
        genre,
        read: parse_read_flag(&answer),
    };
    match service.add_book(book) {
        Ok(()) => writeln!(out, "Book added!\n")?,
        Err(e) => writeln!(out, "Book added, but saving failed: {e}\n")?,
    }
    Ok(())
}

fn remove_book<R: LibraryRepository>(
    service: &mut LibraryService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(title) = prompt(input, out, "Enter title to remove: ")? else {
        return Ok(());
    };
    match service.remove_book(&title) {
        Ok(true) => writeln!(out, "Book removed!\n")?,
        Ok(false) => writeln!(out, "Book not found.\n")?,
        Err(e) => writeln!(out, "Book removed, but saving failed: {e}\n")?,
    }
    Ok(())
}

fn search_books<R: LibraryRepository>(
    service: &mut LibraryService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(keyword) = prompt(input, out, "Enter title or author: ")? else {
        return Ok(());
    };
    writeln!(out, "{}\n", render_search_results(&service.search(&keyword)))?;
    Ok(())
}

// =============================================================================
// Input helpers
// =============================================================================

/// プロンプトを表示して1行読む（trim済み）。EOFならNone。
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    msg: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{msg}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// 整数として解釈できるまで再入力を促す。EOFならNone。
fn prompt_year(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<Option<i32>> {
    loop {
        let Some(line) = prompt(input, out, "Enter publication year: ")? else {
            return Ok(None);
        };
        match parse_year(&line) {
            Ok(year) => return Ok(Some(year)),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

fn parse_year(s: &str) -> Result<i32, AppError> {
    let s = s.trim();
    s.parse()
        .map_err(|_| AppError::InvalidInput(format!("year must be an integer, got '{s}'")))
}

/// "yes"（前後空白・大文字小文字無視）だけを既読として扱う。
/// それ以外は全て未読。
fn parse_read_flag(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("yes")
}

// =============================================================================
// Rendering
// =============================================================================

/// 1冊分の表示行。
pub fn render_book_line(book: &Book) -> String {
    let status = if book.read { "Read" } else { "Unread" };
    format!(
        "{} by {} ({}) - {} - {}",
        book.title, book.author, book.year, book.genre, status
    )
}

/// 全蔵書の番号付き一覧。空なら案内文のみ。
pub fn render_listing(books: &[Book]) -> String {
    if books.is_empty() {
        return "Library is empty.".to_string();
    }
    let mut lines = vec!["Your Library:".to_string()];
    for (i, book) in books.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, render_book_line(book)));
    }
    lines.join("\n")
}

/// 検索結果の一覧。ヒットなしも正常出力。
pub fn render_search_results(matches: &[&Book]) -> String {
    if matches.is_empty() {
        return "No matches found.".to_string();
    }
    let mut lines = vec!["Matching books:".to_string()];
    for book in matches {
        lines.push(render_book_line(book));
    }
    lines.join("\n")
}

/// 既読率は小数1桁に丸めて表示する。
pub fn render_statistics(stats: Statistics) -> String {
    format!(
        "Total books: {}\nPercentage read: {:.1}%",
        stats.total, stats.percent_read
    )
}
