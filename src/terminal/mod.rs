//! Terminal frontend for the picker.
//!
//! Draws the menu on the alternate screen of stderr so that stdout stays free
//! for the selection, and feeds decoded key presses to [`Picker::handle`].
//!
//! # Architecture
//!
//! - **Key map** ([`keymap::intent_for`]): crossterm key events to picker intents.
//! - **Layout** ([`render::layout`]): pure placement of styled text segments.
//! - **Session loop** ([`run`]): blocking read, handle, redraw.
//!
//! ```text
//! crossterm Event → Intent → Picker::handle → WindowSnapshot → layout → stderr
//! ```

pub mod keymap;
pub mod render;

use std::io::{self, BufWriter, IsTerminal, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, QueueableCommand};
use tracing::{debug, instrument};

use crate::config::{rgb_channels, Colors, Config, HexColor};
use crate::error::{Result, ResultExt, WmenuError};
use crate::perf::IntentTimer;
use crate::picker::{Outcome, Picker};
use render::{Area, Line, Tone};

/// Raw mode and the alternate screen, restored when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stderr(), EnterAlternateScreen, Hide) {
            terminal::disable_raw_mode().warn_on_err();
            return Err(e);
        }
        debug!("Entered raw mode");
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        execute!(io::stderr(), ResetColor, Show, LeaveAlternateScreen).warn_on_err();
        terminal::disable_raw_mode().warn_on_err();
        debug!("Restored terminal");
    }
}

/// Run an interactive session until the user commits or cancels.
///
/// Returns the chosen item, or `None` when the session was cancelled.
#[instrument(name = "terminal_session", skip_all)]
pub fn run(mut picker: Picker, config: &Config) -> Result<Option<String>> {
    if !io::stderr().is_terminal() {
        return Err(WmenuError::NotATerminal);
    }

    let _guard = TerminalGuard::enter()?;
    let mut out = BufWriter::new(io::stderr());
    let colors = config.get_colors();
    let prompt = config.get_prompt();
    let mut area = Area::from(terminal::size()?);
    let mut timer = IntentTimer::new();
    let mut redraw = true;

    let selection = loop {
        if redraw {
            let lines = render::layout(&picker.snapshot(), prompt, area, config);
            draw(&mut out, &lines, &colors)?;
            redraw = false;
        }

        match event::read()? {
            Event::Key(key) => {
                let Some(intent) = keymap::intent_for(key) else {
                    continue;
                };
                let name = intent.name();
                let start = timer.start();
                let outcome = picker.handle(intent);
                timer.end(name, start);

                match outcome {
                    Outcome::Continue { redraw: changed } => redraw = changed,
                    Outcome::Selected(item) => break Some(item),
                    Outcome::Cancelled => break None,
                }
            }
            Event::Resize(width, height) => {
                area = Area { width, height };
                redraw = true;
            }
            _ => {}
        }
    };

    timer.log_summary();
    Ok(selection)
}

fn draw<W: Write>(out: &mut W, lines: &[Line], colors: &Colors) -> io::Result<()> {
    out.queue(SetBackgroundColor(rgb(colors.normal.bg)))?
        .queue(Clear(ClearType::All))?;

    for line in lines {
        for segment in &line.segments {
            let scheme = match segment.tone {
                Tone::Normal => colors.normal,
                Tone::Selected => colors.selected,
                Tone::Prompt => colors.prompt,
            };
            out.queue(MoveTo(segment.column, line.row))?
                .queue(SetForegroundColor(rgb(scheme.fg)))?
                .queue(SetBackgroundColor(rgb(scheme.bg)))?
                .queue(Print(&segment.text))?;
        }
    }

    out.queue(ResetColor)?;
    out.flush()
}

fn rgb(color: HexColor) -> Color {
    let (r, g, b) = rgb_channels(color);
    Color::Rgb { r, g, b }
}
