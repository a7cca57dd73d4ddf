use crate::utils::ui;
use dsp_datagen::PlannedFile;

#[derive(Debug, Clone)]
pub struct DryRunDiff {
    before: String,
    after: String,
}

impl DryRunDiff {
    pub fn new(before: String, after: String) -> Self {
        Self { before, after }
    }

    pub fn print(&self) {
        ui::print_diff(&self.before, &self.after);
    }
}

impl From<&PlannedFile> for DryRunDiff {
    fn from(file: &PlannedFile) -> Self {
        Self::new(
            file.previous.clone().unwrap_or_default(),
            file.contents.clone(),
        )
    }
}
