// CLI output formatting with consistent styling using colored.
// Plain println!/eprintln! keep the report on stdout separate from tracing on stderr.

use colored::Colorize as _;
use std::path::Path;

/// Shows `path` relative to `root` when it lives under it.
pub fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

pub fn print_header() {
    println!("{}", "DSP data generator".dimmed());
}

pub fn print_loaded(category: &str, count: usize) {
    println!(
        "{} {} ({} records)",
        "Loaded".dimmed(),
        category.green(),
        count.to_string().cyan()
    );
}

pub fn print_updated(path: &Path) {
    println!("{} {}", "Updated".dimmed(), path.display().to_string().green());
}

pub fn print_unchanged(path: &Path) {
    println!("{} {}", "Unchanged".dimmed(), path.display());
}

pub fn print_would_update(path: &Path) {
    println!(
        "{} {}",
        "Would update".dimmed(),
        path.display().to_string().yellow()
    );
}

pub fn print_stale(path: &Path) {
    eprintln!("{} {}", "Stale".red(), path.display());
}

pub fn print_written_summary(written: usize, unchanged: usize) {
    println!(
        "{} {} file(s) updated, {} unchanged",
        "Done:".green(),
        written,
        unchanged
    );
}

pub fn print_dry_run_summary(changed: usize) {
    if changed == 0 {
        println!("{}", "Dry run: everything is up to date".green());
    } else {
        println!(
            "{} {} file(s) would change",
            "Dry run:".yellow(),
            changed
        );
    }
}

pub fn print_up_to_date() {
    println!("{}", "All generated files are up to date".green());
}

pub fn print_diff(old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let mut line = format!("{} {}", sign, change);
                if change.missing_newline() {
                    line.push('\n');
                }
                match change.tag() {
                    ChangeTag::Delete => print!("{}", line.red()),
                    ChangeTag::Insert => print!("{}", line.green()),
                    ChangeTag::Equal => print!("{}", line.dimmed()),
                }
            }
        }
    }
}
