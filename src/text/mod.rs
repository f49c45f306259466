// テキスト層 - チャンク単位のデコードと単語への正規化

pub mod decoder;
pub mod normalizer;

pub use decoder::{ChunkDecoder, TextEncoding};
pub use normalizer::clean_text;
