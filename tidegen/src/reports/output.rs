//! Rendering targets for command reports.

/// Semantic sink a report writes into.
///
/// Reports say what each line means; the sink picks the formatting.
pub trait Output {
    /// Heading for a group of lines.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// Plain bullet.
    fn list_item(&mut self, text: &str);

    /// Bullet for something that changed on disk.
    fn added_item(&mut self, text: &str);

    /// Bullet for something that needs attention.
    fn flagged_item(&mut self, text: &str);

    /// Labelled separator between blocks of text.
    fn divider(&mut self, label: &str);

    /// Text printed verbatim.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Command output that renders itself into an [`Output`].
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes reports to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn flagged_item(&mut self, text: &str) {
        println!("  ! {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
