use clap::{ArgGroup, Parser};
use khabar_config::AppConfig;

/// Nepali news text cleaning pipeline
#[derive(Debug, Parser)]
#[command(name = "khabar", version, about)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["single", "monitor", "batch", "tokenize", "create_config"]),
))]
pub struct Cli {
    /// Process live data once and exit
    #[arg(long)]
    pub single: bool,

    /// Start continuous monitoring
    #[arg(long)]
    pub monitor: bool,

    /// Preprocess existing tokenized JSON files
    #[arg(long)]
    pub batch: bool,

    /// Fetch articles once and save raw tokens
    #[arg(long)]
    pub tokenize: bool,

    /// Write a sample configuration file and exit
    #[arg(long)]
    pub create_config: bool,

    /// Configuration file path
    #[arg(long, default_value = "config.json")]
    pub config: String,

    /// Server URL (overrides config)
    #[arg(long)]
    pub server: Option<String>,

    /// API endpoint (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Monitoring interval in seconds (overrides config)
    #[arg(long)]
    pub interval: Option<u64>,

    /// Maximum iterations for monitoring (overrides config)
    #[arg(long)]
    pub max_iter: Option<u64>,

    /// Output directory (overrides config)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Input directory for batch preprocessing
    #[arg(long, default_value = "tokenized_data")]
    pub input_dir: String,

    /// Preserve numerical data during cleaning
    #[arg(long)]
    pub preserve_numbers: bool,

    /// Convert Devanagari numerals to Arabic
    #[arg(long)]
    pub normalize_numerals: bool,

    /// Remove Nepali stopwords during token preprocessing
    #[arg(long)]
    pub remove_stopwords: bool,

    /// Minimum text length to keep (overrides config)
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Maximum text length to keep (overrides config)
    #[arg(long)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Monitor,
    Batch,
    Tokenize,
    CreateConfig,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.single {
            Mode::Single
        } else if self.monitor {
            Mode::Monitor
        } else if self.batch {
            Mode::Batch
        } else if self.tokenize {
            Mode::Tokenize
        } else {
            Mode::CreateConfig
        }
    }

    /// Fold command line overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if let Some(interval) = self.interval {
            config.monitoring_interval = interval;
        }
        if let Some(max_iter) = self.max_iter {
            config.max_iterations = Some(max_iter);
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }

        if self.preserve_numbers {
            config.cleaning.preserve_numbers = true;
            config.preprocessing.preserve_numbers = true;
        }
        if self.normalize_numerals {
            config.cleaning.normalize_devanagari_numerals = true;
            config.preprocessing.normalize_devanagari_numerals = true;
        }
        if self.remove_stopwords {
            config.preprocessing.remove_stopwords = true;
        }
        if let Some(min_length) = self.min_length {
            config.cleaning.min_text_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            config.cleaning.max_text_length = max_length;
        }
    }
}
