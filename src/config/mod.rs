//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const LOCAL_CONFIG_BASENAME: &str = "cifra";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STORAGE_KEY: &str = "cifra-blog-posts";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read configuration sources: {0}")]
    Sources(#[from] config::ConfigError),
    #[error("invalid log level `{value}`")]
    InvalidLogLevel { value: String },
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// Command-line arguments for the cifra binary.
#[derive(Debug, Parser)]
#[command(
    name = "cifra",
    version,
    about = "Local-first blog store for a security writer's site"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "CIFRA_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the directory holding the post document.
    #[arg(long = "data-dir", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Override the key the post document is stored under.
    #[arg(long = "storage-key", value_name = "KEY")]
    pub storage_key: Option<String>,

    /// Run without persistent storage: reads serve the built-in default
    /// posts, writes are rejected.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub detached: bool,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List posts, optionally narrowed by tag or search text.
    List(ListArgs),
    /// Show a single post by slug.
    Show(ShowArgs),
    /// Author a new post.
    Write(Box<WriteArgs>),
    /// Delete a post by identifier.
    Delete(DeleteArgs),
    /// Print the tags known to the collection.
    Tags(TagsArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    /// Only posts carrying this exact tag.
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Case-insensitive substring match on title or excerpt.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Emit machine-readable JSON instead of the human listing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Slug of the post to display.
    pub slug: String,

    /// Emit the post as JSON.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct WriteArgs {
    /// Post title.
    #[arg(long, value_name = "TEXT")]
    pub title: String,

    /// Read the markdown body from this file; `-` or omitted reads stdin.
    #[arg(long = "content-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub content_file: Option<PathBuf>,

    /// Short excerpt; derived from the body when omitted.
    #[arg(long, value_name = "TEXT")]
    pub excerpt: Option<String>,

    /// Byline; falls back to a placeholder when blank.
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Tag for the post; repeat for multiple tags.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Publication date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Emit the created post as JSON.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct DeleteArgs {
    /// Identifier of the post to delete.
    pub id: String,
}

#[derive(Debug, Args, Default, Clone)]
pub struct TagsArgs {
    /// Emit the tag set as JSON.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub key: String,
    pub detached: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Settings as deserialized from file and environment sources, before
/// CLI overrides and validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawSettings {
    #[serde(default)]
    pub storage: RawStorageSettings,
    #[serde(default)]
    pub logging: RawLoggingSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStorageSettings {
    pub data_dir: Option<PathBuf>,
    pub key: Option<String>,
    pub detached: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLoggingSettings {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl RawSettings {
    /// Read file and environment sources. An explicit config file must
    /// exist; the local `cifra.toml` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.to_path_buf())),
            None => builder.add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false)),
        };
        let sources = builder
            .add_source(Environment::with_prefix("CIFRA").separator("__"))
            .build()?;
        Ok(sources.try_deserialize()?)
    }

    pub fn apply_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(data_dir) = &overrides.data_dir {
            self.storage.data_dir = Some(data_dir.clone());
        }
        if let Some(key) = &overrides.storage_key {
            self.storage.key = Some(key.clone());
        }
        if overrides.detached {
            self.storage.detached = Some(true);
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    pub fn from_raw(raw: RawSettings) -> Result<Self, SettingsError> {
        let level = match raw.logging.level {
            Some(value) => LevelFilter::from_str(&value)
                .map_err(|_| SettingsError::InvalidLogLevel { value })?,
            None => LevelFilter::INFO,
        };
        let format = if raw.logging.json == Some(true) {
            LogFormat::Json
        } else {
            LogFormat::Compact
        };

        let key = raw
            .storage
            .key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if key.trim().is_empty() {
            return Err(SettingsError::EmptyStorageKey);
        }

        Ok(Self {
            storage: StorageSettings {
                data_dir: raw
                    .storage
                    .data_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
                key,
                detached: raw.storage.detached.unwrap_or(false),
            },
            logging: LoggingSettings { level, format },
        })
    }
}

/// Parse CLI arguments and assemble settings with full precedence.
pub fn load_with_cli() -> Result<(CliArgs, Settings), SettingsError> {
    let cli_args = CliArgs::parse();
    let mut raw = RawSettings::load(cli_args.config_file.as_deref())?;
    raw.apply_overrides(&cli_args.overrides);
    let settings = Settings::from_raw(raw)?;
    Ok((cli_args, settings))
}

#[cfg(test)]
mod tests;
