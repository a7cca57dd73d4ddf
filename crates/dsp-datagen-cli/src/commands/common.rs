use crate::core::CliError;
use crate::utils::ui;
use clap::Args;
use dsp_datagen::{Generator, Plan};
use dsp_datagen_toml::{CONFIG_FILE_NAME, DatagenConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project root the configured paths are relative to (defaults to current directory).
    #[arg(short, long)]
    pub root: Option<PathBuf>,
    /// Configuration file (defaults to `datagen.toml` in the root, or the stock layout if absent).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Reads the configuration. An explicit `--config` must exist.
    pub fn load_config(&self) -> Result<DatagenConfig, CliError> {
        let config = match &self.config {
            Some(path) => DatagenConfig::read_from_path(path)?,
            None => DatagenConfig::load_or_default(self.root().join(CONFIG_FILE_NAME))?,
        };
        Ok(config)
    }

    pub fn generator(&self) -> Result<Generator, CliError> {
        Ok(Generator::new(self.load_config()?, self.root()))
    }
}

/// Loads and renders everything, reporting the loaded categories.
pub fn plan_with_report(generator: &Generator) -> Result<Plan, CliError> {
    let loaded = generator.load()?;
    for category in &loaded {
        ui::print_loaded(&category.category.name, category.records.len());
    }
    Ok(generator.plan_from(&loaded)?)
}
