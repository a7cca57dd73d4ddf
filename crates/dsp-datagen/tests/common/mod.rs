#![allow(dead_code)] // Functions used by different test binaries appear unused per-binary

//! Shared test utilities for dsp-datagen integration tests.

use dsp_datagen::Generator;
use dsp_datagen_toml::DatagenConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const ENUMS: &str = "\
use strum::EnumIter;

#[repr(u16)]
pub enum DSPItem {
    //DSPItem enum start
    Placeholder = 0,
    //DSPItem enum end
}

#[repr(u16)]
pub enum DSPRecipe {
    //DSPRecipe enum start
    //DSPRecipe enum end
}
";

/// Write `contents` to `root/relative`, creating directories.
pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// A project laid out the default way, with two items and one recipe.
pub fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, "src/data/enums.rs", ENUMS);
    write(root, "data/en/items.txt", "1101 Iron Ingot\n1104 Copper Ingot\n");
    write(root, "data/cn/items.txt", "1101 铁块\n1104 铜块\n");
    write(root, "data/en/recipes.txt", "1 Iron Ingot\n");
    write(root, "data/cn/recipes.txt", "1 铁块\n");

    temp_dir
}

pub fn generator(root: &Path) -> Generator {
    Generator::new(DatagenConfig::default(), root)
}
