use std::path::{Path, PathBuf};

use tidegen_core::{GeneratedFile, Module};
use tidegen_manifest::BindingConfig;

use crate::{BindTable, HeaderList, ScriptBundle};

/// The bundled module scripts (`exten.script.inc`)
pub struct ScriptInc<'a> {
    pub path: &'a Path,
    pub modules: &'a [Module],
}

impl GeneratedFile for ScriptInc<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        ScriptBundle::new(self.modules).render()
    }
}

/// The binding-registration table (`exten.Bind.inc`)
pub struct BindInc<'a> {
    pub path: &'a Path,
    pub modules: &'a [Module],
    pub binding: &'a BindingConfig,
}

impl GeneratedFile for BindInc<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        BindTable::new(self.modules, self.binding).render()
    }
}

/// The header-inclusion list (`extenHeader.h`)
pub struct HeaderH<'a> {
    pub path: &'a Path,
    pub modules: &'a [Module],
}

impl GeneratedFile for HeaderH<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        HeaderList::new(self.modules).render()
    }
}
