use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{ColorMode, CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    colors: ColorMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, colors: ColorMode) -> Self {
        Self { json_mode, colors }
    }

    /// Render into any writer; `render` targets stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.colors.is_colored() {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.colors))?;

        if !result.suggestions.is_empty() {
            if self.colors.is_colored() {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.colors.is_colored() {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}
