//! Reads a category's two name lists into [`Record`]s.
//!
//! Each list has one entity per line, `<number> <name>`. Lines are paired by
//! position, and both lines of a pair must carry the same number.

use crate::error::{DatagenError, Mismatch};
use crate::record::Record;
use fs_err as fs;
use std::path::Path;

/// Loads the records of one category from its primary and secondary name lists.
pub fn load_category(primary: &Path, secondary: &Path) -> Result<Vec<Record>, DatagenError> {
    let primary_src = read_list(primary)?;
    let secondary_src = read_list(secondary)?;

    let records = parse_pairs(&primary_src, &secondary_src, primary, secondary)?;
    tracing::debug!(
        "Loaded {} records from {} and {}",
        records.len(),
        primary.display(),
        secondary.display()
    );

    Ok(records)
}

fn read_list(path: &Path) -> Result<String, DatagenError> {
    fs::read_to_string(path).map_err(|e| DatagenError::from_read(path.to_path_buf(), e))
}

/// Pairs two already-read name lists. The paths are only used in errors.
pub fn parse_pairs(
    primary_src: &str,
    secondary_src: &str,
    primary: &Path,
    secondary: &Path,
) -> Result<Vec<Record>, DatagenError> {
    let primary_lines: Vec<&str> = primary_src.lines().collect();
    let secondary_lines: Vec<&str> = secondary_src.lines().collect();

    if primary_lines.len() != secondary_lines.len() {
        return Err(DatagenError::DataMismatch {
            primary: primary.to_path_buf(),
            secondary: secondary.to_path_buf(),
            mismatch: Mismatch::LineCount {
                primary: primary_lines.len(),
                secondary: secondary_lines.len(),
            },
        });
    }

    primary_lines
        .iter()
        .zip(&secondary_lines)
        .enumerate()
        .map(|(index, (primary_line, secondary_line))| {
            let line = index + 1;
            let (number, primary_name) = split_line(primary_line, primary, line)?;
            let (secondary_number, secondary_name) = split_line(secondary_line, secondary, line)?;

            if number != secondary_number {
                return Err(DatagenError::DataMismatch {
                    primary: primary.to_path_buf(),
                    secondary: secondary.to_path_buf(),
                    mismatch: Mismatch::Number {
                        line,
                        primary: number,
                        secondary: secondary_number,
                    },
                });
            }

            Record::new(number, primary_name, secondary_name)
        })
        .collect()
}

/// Splits `<number><whitespace><name>` into its parts, trimming the name.
fn split_line<'a>(text: &'a str, path: &Path, line: usize) -> Result<(u32, &'a str), DatagenError> {
    let malformed = || DatagenError::MalformedLine {
        path: path.to_path_buf(),
        line,
        text: text.to_string(),
    };

    let (number, name) = text
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(malformed)?;
    let number = number.parse::<u32>().map_err(|_| malformed())?;
    let name = name.trim();

    if name.is_empty() {
        return Err(malformed());
    }

    Ok((number, name))
}
