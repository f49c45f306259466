// 統合テスト用のファイル生成ヘルパー
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 相対パスと内容の組からファイルツリーを作成
pub fn create_tree(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let paths = files
        .iter()
        .map(|(relative, content)| write_file(temp_dir.path(), relative, content.as_bytes()))
        .collect();
    (temp_dir, paths)
}

/// 親ディレクトリを作成してからファイルを書き込む
pub fn write_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// 同じ内容のファイルを `count` 個作成
pub fn create_uniform_files(count: usize, content: &str) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let paths = (0..count)
        .map(|i| write_file(temp_dir.path(), &format!("file{i:03}.txt"), content.as_bytes()))
        .collect();
    (temp_dir, paths)
}
