//! Check command report data structures.

use tidegen_codegen::CheckedFile;
use tidegen_core::FileStatus;

use super::output::{Output, Report};

/// Report data from comparing generated outputs with disk.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Every output file with its on-disk status.
    pub files: Vec<CheckedFile>,
}

impl CheckReport {
    /// Whether every output matches what would be generated.
    pub fn is_up_to_date(&self) -> bool {
        self.files.iter().all(|f| f.status == FileStatus::UpToDate)
    }

    fn stale_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status != FileStatus::UpToDate)
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            let path = file.path.display().to_string();
            match file.status {
                FileStatus::UpToDate => out.list_item(&path),
                FileStatus::Stale => out.flagged_item(&format!("{} (stale)", path)),
                FileStatus::Missing => out.flagged_item(&format!("{} (missing)", path)),
            }
        }
        out.newline();

        if self.is_up_to_date() {
            out.preformatted(&format!("✓ {} files up to date", self.files.len()));
        } else {
            out.preformatted(&format!(
                "{} of {} files need regenerating, run `tidegen bake`",
                self.stale_count(),
                self.files.len()
            ));
        }
    }
}
