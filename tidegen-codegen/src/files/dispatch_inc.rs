use std::path::{Path, PathBuf};

use tidegen_core::GeneratedFile;

use crate::DispatchChain;

/// A dispatch chain include (`AutoCom_KeyWord.inc`, `AutoCom_Hint.inc`)
pub struct DispatchInc<'a> {
    pub path: &'a Path,
    pub chain: &'a DispatchChain,
}

impl GeneratedFile for DispatchInc<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        self.chain.render()
    }
}
