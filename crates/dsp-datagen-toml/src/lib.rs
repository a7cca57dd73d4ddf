//! Configuration for `dsp-datagen`, read from a `datagen.toml` file.
//!
//! Every field is optional. An empty file (or no file at all, through
//! [`DatagenConfig::load_or_default`]) describes the stock layout:
//!
//! ```toml
//! data_dir = "data"
//! enums_file = "src/data/enums.rs"
//! locale_dir = "src/locale/data"
//! primary_language = "en"
//! secondary_language = "cn"
//!
//! [[categories]]
//! name = "items"
//! enum_name = "DSPItem"
//!
//! [[categories]]
//! name = "recipes"
//! enum_name = "DSPRecipe"
//! ```

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "datagen.toml";

#[derive(Debug, Error)]
pub enum DatagenConfigError {
    /// Configuration file not found.
    #[error("{} configuration file not found at {}", CONFIG_FILE_NAME, .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The file parsed but describes an unusable layout.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// One entity category: a pair of name lists and the enumeration generated from them.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Category {
    /// File stem of the inputs and outputs (`items` → `items.txt`, `items.rs`).
    pub name: String,
    /// Name of the enumeration, also used as the region marker name.
    pub enum_name: String,
}

impl Category {
    pub fn new(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enum_name: enum_name.into(),
        }
    }
}

/// Which of the two configured languages a name belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// The language identifiers are derived from.
    Primary,
    Secondary,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Primary, Language::Secondary];

    /// Returns the directory name configured for this language.
    pub fn code<'a>(&self, config: &'a DatagenConfig) -> &'a str {
        match self {
            Language::Primary => &config.primary_language,
            Language::Secondary => &config.secondary_language,
        }
    }
}

/// The configuration for `dsp-datagen`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DatagenConfig {
    /// Root of the name lists. Expected structure: {data_dir}/{language}/{category}.txt
    pub data_dir: PathBuf,
    /// Source file holding the marker-delimited enumerations.
    pub enums_file: PathBuf,
    /// Root of the generated lookup tables. Expected structure: {locale_dir}/{language}/{category}.rs
    pub locale_dir: PathBuf,
    pub primary_language: String,
    pub secondary_language: String,
    /// Categories in processing order.
    pub categories: Vec<Category>,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            enums_file: PathBuf::from("src/data/enums.rs"),
            locale_dir: PathBuf::from("src/locale/data"),
            primary_language: "en".to_string(),
            secondary_language: "cn".to_string(),
            categories: vec![
                Category::new("items", "DSPItem"),
                Category::new("recipes", "DSPRecipe"),
            ],
        }
    }
}

impl DatagenConfig {
    /// Reads and validates the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatagenConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DatagenConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;

        let config: DatagenConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Like [`Self::read_from_path`], but a missing file yields the default layout.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, DatagenConfigError> {
        match Self::read_from_path(path) {
            Err(DatagenConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Rejects layouts that would make two outputs collide.
    pub fn validate(&self) -> Result<(), DatagenConfigError> {
        let invalid = |msg: String| Err(DatagenConfigError::InvalidConfig(msg));

        if self.categories.is_empty() {
            return invalid("at least one category is required".to_string());
        }

        for language in [&self.primary_language, &self.secondary_language] {
            if language.trim().is_empty() {
                return invalid("language names must not be empty".to_string());
            }
        }
        if self.primary_language == self.secondary_language {
            return invalid(format!(
                "primary and secondary language are both '{}'",
                self.primary_language
            ));
        }

        let mut names = HashSet::new();
        let mut enums = HashSet::new();
        for category in &self.categories {
            if category.name.is_empty() || category.enum_name.is_empty() {
                return invalid("category name and enum_name must not be empty".to_string());
            }
            if !names.insert(category.name.as_str()) {
                return invalid(format!("category '{}' is listed twice", category.name));
            }
            if !enums.insert(category.enum_name.as_str()) {
                return invalid(format!(
                    "enum '{}' is used by more than one category",
                    category.enum_name
                ));
            }
        }

        // Region markers are matched as substrings, so `Item enum start` would
        // also match the `DSPItem enum start` line.
        for outer in &self.categories {
            for inner in &self.categories {
                if outer.name != inner.name
                    && marker_overlaps(&outer.enum_name, &inner.enum_name)
                {
                    return invalid(format!(
                        "enum '{}' markers also match those of enum '{}'",
                        inner.enum_name, outer.enum_name
                    ));
                }
            }
        }

        Ok(())
    }

    /// Returns the name list for `category` in `language`.
    pub fn input_path(&self, base_dir: &Path, language: Language, category: &Category) -> PathBuf {
        base_dir
            .join(&self.data_dir)
            .join(language.code(self))
            .join(format!("{}.txt", category.name))
    }

    /// Returns the lookup table generated for `category` in `language`.
    pub fn output_path(&self, base_dir: &Path, language: Language, category: &Category) -> PathBuf {
        base_dir
            .join(&self.locale_dir)
            .join(language.code(self))
            .join(format!("{}.rs", category.name))
    }

    /// Returns the marker-delimited enumeration source file.
    pub fn enums_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.enums_file)
    }
}

/// True if a marker line of enum `outer` also contains the marker of enum `inner`.
fn marker_overlaps(outer: &str, inner: &str) -> bool {
    ["enum start", "enum end"]
        .iter()
        .any(|suffix| format!("{outer} {suffix}").contains(&format!("{inner} {suffix}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_read_from_path_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config_content = r#"
data_dir = "names"
primary_language = "en"
secondary_language = "de"

[[categories]]
name = "items"
enum_name = "Item"
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = DatagenConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("names"));
        assert_eq!(config.secondary_language, "de");
        assert_eq!(config.enums_file, PathBuf::from("src/data/enums.rs"));
        assert_eq!(config.categories, vec![Category::new("items", "Item")]);
    }

    #[test]
    fn test_empty_file_is_default_layout() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = DatagenConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config, DatagenConfig::default());
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let non_existent_path = Path::new("/non/existent/path/datagen.toml");
        let result = DatagenConfig::read_from_path(non_existent_path);
        assert!(matches!(result, Err(DatagenConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config =
            DatagenConfig::load_or_default(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, DatagenConfig::default());
    }

    #[test]
    fn test_read_from_path_unknown_field() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "assets_dir = \"i18n\"\n").unwrap();

        let result = DatagenConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(DatagenConfigError::ParseError(_))));
    }

    #[rstest]
    #[case::no_categories(|c: &mut DatagenConfig| c.categories.clear())]
    #[case::same_languages(|c: &mut DatagenConfig| c.secondary_language = "en".to_string())]
    #[case::blank_language(|c: &mut DatagenConfig| c.primary_language = " ".to_string())]
    #[case::duplicate_category(|c: &mut DatagenConfig| c.categories.push(Category::new("items", "Other")))]
    #[case::duplicate_enum(|c: &mut DatagenConfig| c.categories.push(Category::new("other", "DSPItem")))]
    #[case::nested_enum_names(|c: &mut DatagenConfig| c.categories = vec![Category::new("a", "Item"), Category::new("b", "DSPItem")])]
    fn test_validate_rejects(#[case] mutate: fn(&mut DatagenConfig)) {
        let mut config = DatagenConfig::default();
        mutate(&mut config);
        assert!(matches!(
            config.validate(),
            Err(DatagenConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_nested_enum_names_error_names_both() {
        let config = DatagenConfig {
            categories: vec![Category::new("a", "DSPItem"), Category::new("b", "Item")],
            ..DatagenConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: enum 'Item' markers also match those of enum 'DSPItem'"
        );
    }

    #[test]
    fn test_marker_overlaps() {
        assert!(marker_overlaps("DSPItem", "Item"));
        assert!(!marker_overlaps("Item", "DSPItem"));
        assert!(!marker_overlaps("DSPItem", "DSPRecipe"));
        assert!(!marker_overlaps("ItemX", "Item"));
    }

    #[test]
    fn test_paths() {
        let config = DatagenConfig::default();
        let base = Path::new("/repo");
        let items = &config.categories[0];

        assert_eq!(
            config.input_path(base, Language::Secondary, items),
            PathBuf::from("/repo/data/cn/items.txt")
        );
        assert_eq!(
            config.output_path(base, Language::Primary, items),
            PathBuf::from("/repo/src/locale/data/en/items.rs")
        );
        assert_eq!(config.enums_path(base), PathBuf::from("/repo/src/data/enums.rs"));
    }
}
