//! Binding-registration and header-inclusion fragments.
//!
//! Both list modules in the order given, which must be the bundle order.

use tidegen_core::Module;
use tidegen_manifest::BindingConfig;

use crate::builder::CodeBuilder;

/// Binding calls spliced into the host's module initialization function.
#[derive(Debug, Clone, Copy)]
pub struct BindTable<'a> {
    modules: &'a [Module],
    binding: &'a BindingConfig,
}

impl<'a> BindTable<'a> {
    pub fn new(modules: &'a [Module], binding: &'a BindingConfig) -> Self {
        Self { modules, binding }
    }

    /// `<prefix><name>Bind(<context>, <registry>);`
    pub fn invocation(&self, module: &Module) -> String {
        format!(
            "{}{}Bind({}, {});",
            self.binding.prefix,
            module.name(),
            self.binding.context,
            self.binding.registry
        )
    }

    pub fn render(&self) -> String {
        CodeBuilder::tab()
            .indent()
            .each(self.modules, |builder, module| {
                builder
                    .comment(module.name())
                    .line(&self.invocation(module))
            })
            .build()
    }
}

/// `#include` directives for each module's native header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderList<'a> {
    modules: &'a [Module],
}

impl<'a> HeaderList<'a> {
    pub fn new(modules: &'a [Module]) -> Self {
        Self { modules }
    }

    pub fn render(&self) -> String {
        CodeBuilder::c()
            .each(self.modules, |builder, module| {
                builder.line(&format!(
                    "#include \"{name}/{name}.h\"",
                    name = module.name()
                ))
            })
            .build()
    }
}
