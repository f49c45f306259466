// チャンク単位のインクリメンタルデコーダ
// 読み込み境界をまたぐマルチバイト文字を次のチャンクへ持ち越す

use crate::core::{ProcessingError, ProcessingResult};
use std::fmt;
use std::str::FromStr;

/// ファイル内容のデコード方式
///
/// 不正なバイト列は例外にせず読み飛ばす。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl TextEncoding {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin-1",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = ProcessingError;

    fn from_str(label: &str) -> ProcessingResult<Self> {
        match label.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            other => Err(ProcessingError::configuration(format!(
                "未対応のエンコーディングです: {other}"
            ))),
        }
    }
}

/// ステートフルなチャンクデコーダ
///
/// UTF-8では末尾の不完全なシーケンスだけを保持し、次の `decode` 呼び出しで連結する。
#[derive(Debug)]
pub struct ChunkDecoder {
    encoding: TextEncoding,
    pending: Vec<u8>,
}

impl ChunkDecoder {
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            pending: Vec::new(),
        }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// 1チャンク分のバイト列をデコードする
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        match self.encoding {
            TextEncoding::Utf8 => self.decode_utf8(bytes),
            TextEncoding::Ascii => bytes
                .iter()
                .filter(|b| b.is_ascii())
                .map(|&b| char::from(b))
                .collect(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// 入力終端で残った不完全なシーケンスを破棄し、そのバイト数を返す
    pub fn finish(self) -> usize {
        self.pending.len()
    }

    fn decode_utf8(&mut self, bytes: &[u8]) -> String {
        let mut buffer = std::mem::take(&mut self.pending);
        buffer.extend_from_slice(bytes);

        let mut decoded = String::with_capacity(buffer.len());
        let mut input = buffer.as_slice();

        loop {
            match std::str::from_utf8(input) {
                Ok(valid) => {
                    decoded.push_str(valid);
                    break;
                }
                Err(error) => {
                    let valid_up_to = error.valid_up_to();
                    // valid_up_to までは検証済みなので借用のまま取り出せる
                    decoded.push_str(&String::from_utf8_lossy(&input[..valid_up_to]));

                    match error.error_len() {
                        // 不正なシーケンスは読み飛ばす
                        Some(invalid_len) => input = &input[valid_up_to + invalid_len..],
                        // 末尾が途中で切れているだけなので次のチャンクへ持ち越す
                        None => {
                            self.pending = input[valid_up_to..].to_vec();
                            break;
                        }
                    }
                }
            }
        }

        decoded
    }
}
