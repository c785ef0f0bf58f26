//! A single progress bar pinned to the bottom row of the terminal.
//!
//! # Features
//!
//! - Tiny API: create, update, clear.
//! - The bar lives on the last row, so regular output keeps scrolling above it.
//! - Efficient, no-allocation redraws.
//! - The terminal is restored even if the bar is dropped early.
//!
//! # Usage
//!
//! Create a [`ProgressBar`] before your loop, [`update`](ProgressBar::update)
//! it as work advances, and [`clear`](ProgressBar::clear) it when done:
//!
//! ```no_run
//! use tailbar::ProgressBar;
//!
//! # fn main() -> tailbar::Result<()> {
//! let total = 100;
//! let mut bar = ProgressBar::new(total)?;
//!
//! for i in 0..total {
//!     bar.update(i + 1)?;
//!     println!("Iteration {} finished", i + 1);
//! }
//!
//! bar.clear()?;
//! # Ok(())
//! # }
//! ```
//!
//! Anything printed while the bar is active scrolls within the rows above it.
//! The bar itself is redrawn in place.
//!
//! ## Styling
//!
//! Glyphs and the label are set through [`Style`]:
//!
//! ```no_run
//! use tailbar::{ProgressBar, Style};
//!
//! # fn main() -> tailbar::Result<()> {
//! let style = Style::default()
//!     .with_label("Copying")
//!     .with_fill('=')
//!     .with_empty('-')
//!     .with_end(None);
//!
//! let mut bar = ProgressBar::with_style(50, style)?;
//! bar.update(10)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Other Outputs
//!
//! Any [`std::io::Write`] can receive the bar, given explicit [`Geometry`]:
//!
//! ```
//! use tailbar::{Geometry, ProgressBar, Style};
//!
//! # fn main() -> tailbar::Result<()> {
//! let geometry = Geometry { rows: 24, columns: 31 };
//! let mut bar = ProgressBar::with_output(4, Style::default(), geometry, Vec::new())?;
//!
//! bar.update(2)?;
//! assert_eq!("Progress: [ 50%]#####     |", bar.line());
//! # Ok(())
//! # }
//! ```
//!
//! # Caveats
//!
//! - Your terminal must support ANSI codes.
//! - Only one bar at a time, since it owns the last row.
//! - No dynamic resizing of the bar if the window size changes.
//! - Other threads writing to the terminal will garble the display.

#![doc(html_root_url = "https://docs.rs/tailbar/0.1.0")]

mod error;

pub use error::{Error, Result};

use log::{debug, trace, warn};
use std::fmt::Write as _;
use std::io::{Stdout, Write};
use terminal_size::{terminal_size, Height, Width};
use unicode_width::UnicodeWidthStr;

/// Columns kept free to the right of the bar.
pub const COLUMN_MARGIN: usize = 5;

/// The `": [100%]"` part of the prefix that follows the label.
const PERCENT_FIELD: &str = ": [100%]";

/// Terminal dimensions, in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    /// Height in rows.
    pub rows: u16,
    /// Width in columns.
    pub columns: u16,
}

impl Geometry {
    /// The size of the current terminal, if there is one.
    pub fn query() -> Option<Geometry> {
        terminal_size().map(|(Width(columns), Height(rows))| Geometry { rows, columns })
    }
}

/// The look of a [`ProgressBar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Drawn for completed progress. Bar glyphs are assumed to take one
    /// column each.
    pub fill: char,
    /// Drawn for remaining progress.
    pub empty: char,
    /// Drawn once after the bar, if present.
    pub end: Option<char>,
    /// Text before the percentage.
    pub label: String,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            fill: '#',
            empty: ' ',
            end: Some('|'),
            label: "Progress".to_string(),
        }
    }
}

impl Style {
    /// Set the glyph for completed progress.
    pub fn with_fill(mut self, fill: char) -> Style {
        self.fill = fill;
        self
    }

    /// Set the glyph for remaining progress.
    pub fn with_empty(mut self, empty: char) -> Style {
        self.empty = empty;
        self
    }

    /// Set the glyph drawn after the bar, or `None` for no end cap.
    pub fn with_end(mut self, end: Option<char>) -> Style {
        self.end = end;
        self
    }

    /// Set the text shown before the percentage.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Style {
        self.label = label.into();
        self
    }

    /// Columns taken by `"<label>: [100%]"`.
    pub fn prefix_width(&self) -> usize {
        UnicodeWidthStr::width(self.label.as_str()) + PERCENT_FIELD.len()
    }

    /// Bytes needed to render a full line of `width` bar glyphs.
    fn line_capacity(&self, width: usize) -> usize {
        let glyph = self.fill.len_utf8().max(self.empty.len_utf8());
        let end = self.end.map_or(0, char::len_utf8);
        self.label.len() + PERCENT_FIELD.len() + width * glyph + end
    }
}

/// A progress bar drawn on the last row of the terminal.
///
/// Creating a bar reserves the last row by shrinking the terminal's scroll
/// region. The row is handed back by [`ProgressBar::clear`], or when the bar
/// is dropped.
pub struct ProgressBar<W: Write = Stdout> {
    total: usize,
    curr: usize,
    /// Terminal size at creation time.
    geometry: Geometry,
    /// Number of glyphs in the bar proper.
    width: usize,
    /// `width` fill glyphs, sliced on every draw.
    fill_run: String,
    /// The most recently rendered line.
    line: String,
    style: Style,
    out: W,
    cleared: bool,
}

impl ProgressBar<Stdout> {
    /// Reserve the terminal's last row for a bar with default styling.
    ///
    /// Fails if `total` is `0` or if the terminal is too small to fit the bar.
    pub fn new(total: usize) -> Result<ProgressBar> {
        ProgressBar::with_style(total, Style::default())
    }

    /// Like [`ProgressBar::new`] but with a custom [`Style`].
    pub fn with_style(total: usize, style: Style) -> Result<ProgressBar> {
        let geometry = Geometry::query().ok_or(Error::NotATerminal)?;
        ProgressBar::with_output(total, style, geometry, std::io::stdout())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Create a bar that writes to `out`, which is assumed to be a terminal of
    /// the given size.
    pub fn with_output(total: usize, style: Style, geometry: Geometry, out: W) -> Result<Self> {
        if total == 0 {
            return Err(Error::ZeroTotal);
        }

        if geometry.rows < 2 {
            return Err(Error::TooShort {
                rows: geometry.rows,
            });
        }

        let columns = usize::from(geometry.columns);
        let required = style.prefix_width() + COLUMN_MARGIN;
        if columns < required {
            return Err(Error::TooNarrow { columns, required });
        }

        let width = columns - required;
        let fill_run = std::iter::repeat(style.fill).take(width).collect();
        let line = String::with_capacity(style.line_capacity(width));

        let mut bar = ProgressBar {
            total,
            curr: 0,
            geometry,
            width,
            fill_run,
            line,
            style,
            out,
            cleared: false,
        };

        bar.reserve()?;
        debug!(
            "Reserved row {} of a {}x{} terminal for a {}-glyph bar.",
            geometry.rows, geometry.columns, geometry.rows, width
        );

        Ok(bar)
    }

    /// Shrink the scroll region so that it stops just above the last row.
    fn reserve(&mut self) -> Result<()> {
        // Newline first, so that the last row is empty and the cursor isn't on it.
        write!(
            self.out,
            "\n\x1B7\x1B[0;{}r\x1B8\x1B[1A",
            self.geometry.rows - 1
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Set the bar's progress value, but don't draw it.
    pub fn set(&mut self, value: usize) {
        self.curr = value;
    }

    /// Increment the bar's progress, but don't draw it.
    pub fn inc(&mut self, value: usize) {
        self.set(self.curr.saturating_add(value));
    }

    /// Set the bar's value and immediately draw it.
    pub fn update(&mut self, value: usize) -> Result<()> {
        self.set(value);
        self.draw()
    }

    /// Increment the bar's progress and immediately draw it.
    pub fn inc_and_draw(&mut self, value: usize) -> Result<()> {
        self.inc(value);
        self.draw()
    }

    /// Render the current value onto the last row.
    ///
    /// Values beyond the total are drawn as a full bar.
    pub fn draw(&mut self) -> Result<()> {
        if self.cleared {
            return Err(Error::Cleared);
        }

        let curr = self.curr.min(self.total);
        let filled = scale(curr, self.total, self.width);
        let percent = scale(curr, self.total, 100);

        self.line.clear();
        let _ = write!(self.line, "{}: [{:3}%]", self.style.label, percent);
        self.line
            .push_str(&self.fill_run[..filled * self.style.fill.len_utf8()]);
        self.line
            .extend(std::iter::repeat(self.style.empty).take(self.width - filled));
        if let Some(end) = self.style.end {
            self.line.push(end);
        }

        write!(
            self.out,
            "\x1B7\x1B[{};0f{}\x1B8",
            self.geometry.rows, self.line
        )?;

        // Very important, or the output won't appear fluid.
        self.out.flush()?;
        trace!("Drew {}/{} ({} of {} glyphs).", curr, self.total, filled, self.width);

        Ok(())
    }

    /// Give the last row back to the terminal and erase the bar.
    ///
    /// The bar is zeroed afterwards. Further draws fail with
    /// [`Error::Cleared`], and clearing again does nothing. If writing fails,
    /// the bar stays live and the next `clear` (or drop) tries again.
    pub fn clear(&mut self) -> Result<()> {
        if self.cleared {
            return Ok(());
        }

        let rows = self.geometry.rows;
        write!(
            self.out,
            "\x1B7\x1B[0;{}r\x1B[{};0f\x1B[0K\x1B8",
            rows, rows
        )?;
        self.out.flush()?;

        self.cleared = true;
        self.total = 0;
        self.curr = 0;
        self.geometry = Geometry::default();
        self.width = 0;
        self.fill_run.clear();
        self.line.clear();
        debug!("Released the terminal's last row.");

        Ok(())
    }

    /// Has the bar reached its total?
    pub fn is_done(&self) -> bool {
        !self.cleared && self.curr >= self.total
    }

    /// Has the bar been cleared?
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// The value at which the bar is full.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The bar's current progress value.
    pub fn current(&self) -> usize {
        self.curr
    }

    /// The terminal size captured when the bar was created.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of glyphs between the prefix and the end cap.
    pub fn bar_width(&self) -> usize {
        self.width
    }

    /// The most recently drawn line, without control sequences.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The bar's [`Style`].
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The underlying output.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if let Err(e) = self.clear() {
            warn!("Failed to release the terminal's last row: {}", e);
        }
    }
}

/// `value / total` of `size`, rounded down.
fn scale(value: usize, total: usize, size: usize) -> usize {
    (value as u128 * size as u128 / total as u128) as usize
}
