//! Terminal rendering for the markdown produced by `stride-core` displays.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown with termimad, or prints it verbatim when color is off.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Headers keep their hash marks, and consecutive table rows are rendered
    /// together so the calendar grid lines up.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let mut table = String::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push_str(line);
                table.push('\n');
                continue;
            }
            self.flush_table(&mut table);

            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);
        Ok(())
    }

    fn flush_table(&self, table: &mut String) {
        if !table.is_empty() {
            self.skin.print_text(table);
            table.clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
