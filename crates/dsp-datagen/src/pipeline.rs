//! Staged regeneration of every generated file.
//!
//! [`Generator::plan`] loads and validates all categories and renders every
//! output in memory. Nothing touches the disk until [`Plan::apply`], so a bad
//! name list in the last category leaves the enumeration file and all lookup
//! tables exactly as they were.

use crate::error::DatagenError;
use crate::locale;
use crate::loader;
use crate::record::{self, Record};
use crate::region::Region;
use dsp_datagen_toml::{Category, DatagenConfig, Language};
use fs_err as fs;
use std::path::{Path, PathBuf};

/// The records loaded for one category.
#[derive(Clone, Debug)]
pub struct LoadedCategory {
    pub category: Category,
    pub records: Vec<Record>,
}

/// One file the generator wants to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    /// Contents on disk when the plan was made, `None` if the file did not exist.
    pub previous: Option<String>,
    pub contents: String,
}

impl PlannedFile {
    pub fn is_changed(&self) -> bool {
        self.previous.as_deref() != Some(self.contents.as_str())
    }
}

/// Every output of a run, rendered but not yet written.
#[derive(Clone, Debug, Default)]
pub struct Plan {
    pub files: Vec<PlannedFile>,
}

/// What [`Plan::apply`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files whose contents changed.
    pub written: Vec<PathBuf>,
    /// Files rewritten with identical contents.
    pub unchanged: Vec<PathBuf>,
}

impl Plan {
    /// Files whose planned contents differ from what is on disk.
    pub fn changed(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|file| file.is_changed())
    }

    pub fn is_up_to_date(&self) -> bool {
        self.changed().next().is_none()
    }

    /// Writes every planned file in full, creating parent directories as needed.
    pub fn apply(&self) -> Result<Summary, DatagenError> {
        let mut summary = Summary::default();

        for file in &self.files {
            if let Some(parent) = file.path.parent() {
                fs::create_dir_all(parent).map_err(|source| DatagenError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&file.path, &file.contents).map_err(|source| DatagenError::Io {
                path: file.path.clone(),
                source,
            })?;

            if file.is_changed() {
                tracing::info!("Updated {}", file.path.display());
                summary.written.push(file.path.clone());
            } else {
                tracing::debug!("Unchanged {}", file.path.display());
                summary.unchanged.push(file.path.clone());
            }
        }

        Ok(summary)
    }
}

/// Regenerates the enumeration regions and lookup tables described by a [`DatagenConfig`].
#[derive(Clone, Debug)]
pub struct Generator {
    config: DatagenConfig,
    base_dir: PathBuf,
}

impl Generator {
    /// `base_dir` is the directory the configured paths are relative to.
    pub fn new(config: DatagenConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Loads every category and checks identifiers and numbers are unique within each.
    pub fn load(&self) -> Result<Vec<LoadedCategory>, DatagenError> {
        self.config
            .categories
            .iter()
            .map(|category| {
                let records = loader::load_category(
                    &self.config.input_path(&self.base_dir, Language::Primary, category),
                    &self.config.input_path(&self.base_dir, Language::Secondary, category),
                )?;
                record::check_unique(&records, &category.name)?;

                Ok(LoadedCategory {
                    category: category.clone(),
                    records,
                })
            })
            .collect()
    }

    /// Renders every output without writing anything.
    pub fn plan(&self) -> Result<Plan, DatagenError> {
        self.plan_from(&self.load()?)
    }

    /// Renders every output from categories already returned by [`Self::load`].
    pub fn plan_from(&self, loaded: &[LoadedCategory]) -> Result<Plan, DatagenError> {
        let enums_path = self.config.enums_path(&self.base_dir);
        let original = read_existing(&enums_path)?.ok_or_else(|| DatagenError::FileNotFound {
            path: enums_path.clone(),
        })?;

        let mut enums_source = original.clone();
        for LoadedCategory { category, records } in loaded {
            enums_source =
                Region::enum_variants(&category.enum_name).rewrite(&enums_source, records)?;
        }

        let mut files = vec![PlannedFile {
            path: enums_path,
            previous: Some(original),
            contents: enums_source,
        }];

        for LoadedCategory { category, records } in loaded {
            for language in Language::ALL {
                let path = self.config.output_path(&self.base_dir, language, category);
                files.push(PlannedFile {
                    previous: read_existing(&path)?,
                    contents: locale::emit(records, &category.enum_name, |r| r.name(language)),
                    path,
                });
            }
        }

        Ok(Plan { files })
    }

    /// Plans and applies in one step.
    pub fn run(&self) -> Result<Summary, DatagenError> {
        self.plan()?.apply()
    }
}

fn read_existing(path: &Path) -> Result<Option<String>, DatagenError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DatagenError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
