use crate::args::OutputFormat;
use crate::presentation::{ColorMode, ConsoleRenderer};
use anyhow::Result;
use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use wardrobe_runtime::{Config, KeyValueStore, MemoryStore, SqliteStore, Wardrobe};

pub type Session = Wardrobe<Box<dyn KeyValueStore>>;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
    pub ephemeral: bool,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat, ephemeral: bool) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            format,
            ephemeral,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("wardrobe.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("wardrobe.log")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&self.config_path())?))
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Colored text only when enabled in config and stdout is a terminal
    pub fn use_color(&self) -> Result<bool> {
        Ok(self.config()?.display.color && std::io::stdout().is_terminal())
    }

    pub fn renderer(&self) -> Result<ConsoleRenderer> {
        let colors = ColorMode::from_enabled(self.use_color()?);
        Ok(ConsoleRenderer::new(self.json_mode(), colors))
    }

    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        if self.ephemeral {
            tracing::debug!("using in-memory store");
            return Ok(Box::new(MemoryStore::new()));
        }
        Ok(Box::new(SqliteStore::open(&self.db_path())?))
    }

    pub fn open_wardrobe(&self) -> Result<Session> {
        let store = self.open_store()?;
        Ok(Wardrobe::open(store, self.config()?)?)
    }
}
