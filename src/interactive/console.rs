//! User-facing banners and notices.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

/// Styled status output for the interactive workflow.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Welcome panel shown when the interactive workflow starts.
    pub fn welcome(&mut self) -> io::Result<()> {
        self.panel(
            "micoo",
            Color::Blue,
            &[
                ("Welcome to micoo interactive mode!".to_string(), Emphasis::Bold),
                ("Select and manage your mise cookbooks".to_string(), Emphasis::Italic),
            ],
        )
    }

    /// Success panel shown after a cookbook has been written.
    pub fn success(&mut self, cookbook: &str, output: &str) -> io::Result<()> {
        self.panel(
            "Success",
            Color::Green,
            &[
                (format!("Successfully generated {cookbook} cookbook!"), Emphasis::Bold),
                (format!("Output: {output}"), Emphasis::Plain),
            ],
        )
    }

    /// Neutral notice: the run ended without doing anything.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.yellow())
    }

    /// Something the user asked for could not be done.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.red())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn panel(&mut self, title: &str, color: Color, lines: &[(String, Emphasis)]) -> io::Result<()> {
        let inner = lines
            .iter()
            .map(|(text, _)| text.chars().count())
            .chain(std::iter::once(title.chars().count() + 2))
            .max()
            .unwrap_or(0)
            + 2;

        let title_fill = inner.saturating_sub(title.chars().count() + 2);
        let left = title_fill / 2;
        let right = title_fill - left;
        let top = format!("╭{} {title} {}╮", "─".repeat(left), "─".repeat(right));
        writeln!(self.out, "{}", top.with(color))?;

        for (text, emphasis) in lines {
            let pad = inner - 2 - text.chars().count();
            let styled = match emphasis {
                Emphasis::Bold => text.as_str().with(color).bold(),
                Emphasis::Italic => text.as_str().italic(),
                Emphasis::Plain => text.as_str().with(color),
            };
            writeln!(
                self.out,
                "{} {styled}{} {}",
                "│".with(color),
                " ".repeat(pad),
                "│".with(color)
            )?;
        }

        writeln!(self.out, "{}", format!("╰{}╯", "─".repeat(inner)).with(color))
    }
}

#[derive(Debug, Clone, Copy)]
enum Emphasis {
    Bold,
    Italic,
    Plain,
}
