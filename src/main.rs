use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let library_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("library.txt"));

    bookshelf::interface::menu::run(library_path)
}
