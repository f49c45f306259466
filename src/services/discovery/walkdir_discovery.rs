use crate::core::FileDiscovery;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// walkdirによるローカルファイルシステムの走査
///
/// ネストしたサブディレクトリを含む、ディレクトリ以外の全エントリを返す。
/// 走査中に読めなかったエントリは警告を出してスキップする。
#[derive(Debug, Clone, Default)]
pub struct WalkDirDiscovery {
    follow_links: bool,
}

impl WalkDirDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl FileDiscovery for WalkDirDiscovery {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut file_paths = Vec::new();

        for entry in WalkDir::new(root).follow_links(self.follow_links) {
            match entry {
                Ok(entry) => {
                    if is_file_entry(&entry) {
                        file_paths.push(entry.into_path());
                    }
                }
                // ルート自体が読めない場合は走査全体の失敗
                Err(error) if error.depth() == 0 => {
                    return Err(error)
                        .with_context(|| format!("Failed to walk directory: {}", root.display()));
                }
                Err(error) => {
                    warn!("Skipping unreadable entry under {}: {error}", root.display());
                }
            }
        }

        Ok(file_paths)
    }
}

/// ディレクトリ以外のエントリはすべてファイルとして扱う
///
/// ファイルへのシンボリックリンクとリンク切れも含める。
/// ディレクトリへのリンクは辿らず、ファイルとしても数えない。
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    !(file_type.is_symlink() && entry.path().is_dir())
}
