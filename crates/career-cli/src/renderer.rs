//! Terminal rendering for markdown output
//!
//! Rich mode styles headings and task checkboxes and hands every other line
//! to a termimad skin. Plain mode prints the markdown unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match styled_line(line) {
                Some(styled) => println!("{styled}"),
                None => {
                    // Plain lines (descriptions, open tasks) go through the skin
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Lines printed with raw escapes: headings keep their `#` marks, done tasks
/// are green.
fn styled_line(line: &str) -> Option<String> {
    if line.starts_with('#') {
        Some(format!("{BLUE}{line}{RESET}"))
    } else if line.starts_with("- [x]") {
        Some(format!("{GREEN}{line}{RESET}"))
    } else {
        None
    }
}
