//! Regenerates the item and recipe enumerations of a hand-maintained source
//! file, and the per-language lookup tables naming their variants, from
//! paired `<number> <name>` lists in two languages.
//!
//! ```no_run
//! use dsp_datagen::Generator;
//! use dsp_datagen_toml::DatagenConfig;
//!
//! let config = DatagenConfig::load_or_default("datagen.toml")?;
//! let summary = Generator::new(config, ".").run()?;
//! println!("{} files updated", summary.written.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod ident;
pub mod loader;
pub mod locale;
pub mod pipeline;
pub mod record;
pub mod region;

pub use error::{DatagenError, MarkerProblem, Mismatch};
pub use pipeline::{Generator, LoadedCategory, Plan, PlannedFile, Summary};
pub use record::Record;
pub use region::Region;
