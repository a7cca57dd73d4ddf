//! Regenerates marker-delimited regions of a hand-maintained source file.
//!
//! A region named `DSPItem` is everything between the line containing
//! `DSPItem enum start` and the line containing `DSPItem enum end`:
//!
//! ```text
//! pub enum DSPItem {
//!     //DSPItem enum start
//!     IronOre = 1001,
//!     //DSPItem enum end
//! }
//! ```
//!
//! Rewriting replaces the lines between the markers and leaves every other
//! byte of the file alone, markers included.

use crate::error::{DatagenError, MarkerProblem};
use crate::record::Record;

/// Formats one generated line, without its terminator.
pub type LineFormatter = fn(&Record) -> String;

/// A named region together with the formatter producing its lines.
#[derive(Clone, Debug)]
pub struct Region<F = LineFormatter> {
    name: String,
    formatter: F,
}

impl Region {
    /// A region listing one `Id = number,` enumeration variant per record.
    pub fn enum_variants(name: impl Into<String>) -> Self {
        Self::new(name, enum_variant_line)
    }
}

/// `    IronIngot = 1101,`
pub fn enum_variant_line(record: &Record) -> String {
    format!("    {} = {},", record.id, record.number)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Before,
    Within,
    After,
}

impl<F> Region<F>
where
    F: Fn(&Record) -> String,
{
    pub fn new(name: impl Into<String>, formatter: F) -> Self {
        Self {
            name: name.into(),
            formatter,
        }
    }

    pub fn start_marker(&self) -> String {
        format!("{} enum start", self.name)
    }

    pub fn end_marker(&self) -> String {
        format!("{} enum end", self.name)
    }

    /// Returns `source` with this region's contents replaced by one line per record.
    ///
    /// Fails without producing output unless the file holds exactly one start
    /// marker followed by exactly one end marker. Generated lines reuse the
    /// start marker's line terminator.
    pub fn rewrite(&self, source: &str, records: &[Record]) -> Result<String, DatagenError> {
        let lines: Vec<&str> = source.split_inclusive('\n').collect();
        let start_marker = self.start_marker();
        let end_marker = self.end_marker();
        self.locate(&lines, &start_marker, &end_marker)?;

        let mut output = String::with_capacity(source.len());
        let mut state = State::Before;

        for line in lines {
            match state {
                State::Before => {
                    output.push_str(line);
                    if line.contains(&start_marker) {
                        let terminator = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
                        for record in records {
                            output.push_str(&(self.formatter)(record));
                            output.push_str(terminator);
                        }
                        state = State::Within;
                    }
                },
                State::Within => {
                    if line.contains(&end_marker) {
                        output.push_str(line);
                        state = State::After;
                    }
                },
                State::After => output.push_str(line),
            }
        }

        tracing::debug!("Rewrote region {} with {} lines", self.name, records.len());

        Ok(output)
    }

    fn locate(
        &self,
        lines: &[&str],
        start_marker: &str,
        end_marker: &str,
    ) -> Result<(), DatagenError> {
        let start = self.single_line(lines, start_marker)?;
        let end = self.single_line(lines, end_marker)?;

        if end <= start {
            return Err(self.marker_error(end_marker, MarkerProblem::OutOfOrder));
        }

        Ok(())
    }

    fn single_line(&self, lines: &[&str], marker: &str) -> Result<usize, DatagenError> {
        let mut found = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(marker))
            .map(|(index, _)| index);

        match (found.next(), found.next()) {
            (Some(index), None) => Ok(index),
            (None, _) => Err(self.marker_error(marker, MarkerProblem::Missing)),
            (Some(_), Some(_)) => Err(self.marker_error(marker, MarkerProblem::Duplicated)),
        }
    }

    fn marker_error(&self, marker: &str, problem: MarkerProblem) -> DatagenError {
        DatagenError::MarkerNotFound {
            region: self.name.clone(),
            marker: marker.to_string(),
            problem,
        }
    }
}
