//! Layout of a picker snapshot into positioned, styled text segments.
//!
//! Layout is pure: it only decides what goes where. Writing the segments to
//! the terminal happens in the parent module.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::{Config, Orientation, Position};
use crate::picker::WindowSnapshot;

/// Which color scheme a segment is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Selected,
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub column: u16,
    pub text: String,
    pub tone: Tone,
}

/// One terminal row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub row: u16,
    pub segments: Vec<Segment>,
}

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub width: u16,
    pub height: u16,
}

impl From<(u16, u16)> for Area {
    fn from((width, height): (u16, u16)) -> Self {
        Area { width, height }
    }
}

/// Lay out `snapshot` for a terminal of size `area`.
///
/// Horizontal: a single row with the prompt, a search box `searchMargin` of
/// the width wide, then the items separated by `padding` columns. Items that
/// do not fit are clipped at the right edge.
///
/// Vertical: the prompt and query on the first row, one item per row below,
/// scrolled so the highlighted item is always on screen.
pub fn layout(
    snapshot: &WindowSnapshot<'_>,
    prompt: &str,
    area: Area,
    config: &Config,
) -> Vec<Line> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let mut lines = match config.get_orientation() {
        Orientation::Horizontal => vec![horizontal_row(snapshot, prompt, area.width, config)],
        Orientation::Vertical => vertical_rows(snapshot, prompt, area),
    };

    if config.get_position() == Position::Bottom {
        let offset = area.height.saturating_sub(lines.len() as u16);
        for line in &mut lines {
            line.row += offset;
        }
    }
    lines
}

fn horizontal_row(
    snapshot: &WindowSnapshot<'_>,
    prompt: &str,
    width: u16,
    config: &Config,
) -> Line {
    let mut row = RowBuilder::new(width);
    row.push_prompt(prompt);

    let box_width = (f32::from(width) * config.get_search_margin()) as usize;
    let box_start = row.column;
    let query = printable(snapshot.query);
    // last column of the box stays empty as a gap before the items
    row.push(
        tail_to_width(&query, box_width.saturating_sub(1)),
        Tone::Normal,
    );
    row.column = box_start + box_width;

    let padding = usize::from(config.get_padding());
    for (slot, item) in snapshot.items.iter().enumerate() {
        if !row.push(item, tone_for(slot, snapshot.selected)) {
            break;
        }
        row.column += padding;
    }
    row.finish(0)
}

fn vertical_rows(snapshot: &WindowSnapshot<'_>, prompt: &str, area: Area) -> Vec<Line> {
    let mut header = RowBuilder::new(area.width);
    header.push_prompt(prompt);
    let room = header.remaining();
    let query = printable(snapshot.query);
    header.push(tail_to_width(&query, room), Tone::Normal);

    let mut lines = vec![header.finish(0)];

    let rows = usize::from(area.height - 1);
    let first = snapshot
        .selected
        .map_or(0, |selected| (selected + 1).saturating_sub(rows));
    for (row, (slot, item)) in snapshot
        .items
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .enumerate()
    {
        let mut builder = RowBuilder::new(area.width);
        builder.push(item, tone_for(slot, snapshot.selected));
        lines.push(builder.finish(row as u16 + 1));
    }
    lines
}

fn tone_for(slot: usize, selected: Option<usize>) -> Tone {
    if selected == Some(slot) {
        Tone::Selected
    } else {
        Tone::Normal
    }
}

struct RowBuilder {
    width: usize,
    column: usize,
    segments: Vec<Segment>,
}

impl RowBuilder {
    fn new(width: u16) -> Self {
        RowBuilder {
            width: usize::from(width),
            column: 0,
            segments: Vec::new(),
        }
    }

    fn remaining(&self) -> usize {
        self.width.saturating_sub(self.column)
    }

    /// Prompt followed by a one column gap; nothing when the prompt is empty.
    fn push_prompt(&mut self, prompt: &str) {
        if !prompt.is_empty() {
            self.push(prompt, Tone::Prompt);
            self.column += 1;
        }
    }

    /// Append `text`, clipped to the remaining width. Returns false when it
    /// did not fit entirely.
    fn push(&mut self, text: &str, tone: Tone) -> bool {
        let text = printable(text);
        let clipped = clip_to_width(&text, self.remaining());
        if !clipped.is_empty() {
            self.segments.push(Segment {
                column: self.column as u16,
                text: clipped.to_string(),
                tone,
            });
        }
        self.column += clipped.width();
        clipped.len() == text.len()
    }

    fn finish(self, row: u16) -> Line {
        Line {
            row,
            segments: self.segments,
        }
    }
}

/// `text` with tabs as spaces and other control characters as U+FFFD, so
/// nothing reaches the terminal as a raw escape
fn printable(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '\t' => ' ',
                c if c.is_control() => '\u{fffd}',
                c => c,
            })
            .collect(),
    )
}

/// Longest prefix of `text` at most `max` columns wide
fn clip_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Longest suffix of `text` at most `max` columns wide, so the end of a long
/// query stays visible while typing
fn tail_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
