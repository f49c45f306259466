use crate::core::{ProcessRequest, ProcessingResult};
use crate::services::config::implementations::{DEFAULT_CHUNK_SIZE, DEFAULT_CONCURRENT_LIMIT};
use crate::services::DefaultProcessingConfig;
use crate::strategy::StrategyKind;
use crate::text::TextEncoding;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chunkwise")]
#[command(about = "Process text files in bounded-concurrency chunks")]
#[command(version)]
pub struct Cli {
    /// Directory to search recursively for files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Individual file to process (can be repeated)
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,

    /// Processing strategy to apply
    #[arg(short, long, value_enum, default_value_t = StrategyArg::WordFreq)]
    pub strategy: StrategyArg,

    /// Query for sentence search
    #[arg(short = 'q', long, required_if_eq("strategy", "sentence_search"))]
    pub search_query: Option<String>,

    /// Match the search query case-sensitively
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Maximum number of files processed at once
    #[arg(long, env = "CONCURRENT_LIMIT", default_value_t = DEFAULT_CONCURRENT_LIMIT)]
    pub concurrent_limit: usize,

    /// Number of bytes read per chunk
    #[arg(long, env = "CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Text encoding of the input files (utf-8, ascii, latin-1)
    #[arg(long, env = "ENCODING", default_value = "utf-8")]
    pub encoding: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    #[value(name = "word_freq")]
    WordFreq,
    #[value(name = "sentence_search")]
    SentenceSearch,
}

impl Cli {
    /// 引数から処理リクエストを構築
    pub fn request(&self) -> ProcessRequest {
        let mut request = ProcessRequest::from_files(self.files.iter().cloned());
        if let Some(dir) = &self.dir {
            request = request.with_directory(dir.clone());
        }
        request
    }

    /// 引数からストラテジー記述子を構築
    pub fn strategy_kind(&self) -> StrategyKind {
        match self.strategy {
            StrategyArg::WordFreq => StrategyKind::WordFrequency,
            StrategyArg::SentenceSearch => StrategyKind::sentence_search(
                self.search_query.clone().unwrap_or_default(),
                self.case_sensitive,
            ),
        }
    }

    /// 引数と環境変数から処理設定を構築
    pub fn processing_config(&self) -> ProcessingResult<DefaultProcessingConfig> {
        let encoding: TextEncoding = self.encoding.parse()?;
        let config = DefaultProcessingConfig::new(self.concurrent_limit, self.chunk_size)
            .with_encoding(encoding);
        config.validate()?;
        Ok(config)
    }
}
