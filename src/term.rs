//! Terminal output: ANSI encoding, batch streaming, interactive animation

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::debug;

use crate::models::{self, Model};
use crate::rasterizer::{Frame, Pixel, RenderOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Encode one row as truecolor ANSI: a `38;2` escape per color change,
/// ending with a reset. No trailing newline.
pub fn row_to_ansi(row: &[Pixel]) -> String {
    let mut out = String::with_capacity(row.len() * 4);
    let mut current = None;
    for pixel in row {
        if current != Some(pixel.color) {
            let c = pixel.color;
            out.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
            current = Some(pixel.color);
        }
        out.push(pixel.glyph);
    }
    out.push_str("\x1b[0m");
    out
}

/// Encode a whole frame, each row followed by `newline`.
pub fn frame_to_ansi(frame: &Frame, newline: &str) -> String {
    let mut out = String::with_capacity(frame.width * frame.height * 4);
    for row in frame.rows() {
        out.push_str(&row_to_ansi(row));
        out.push_str(newline);
    }
    out
}

/// Resolve the output grid: explicit sizes win, then the live terminal
/// size, then the stock fallback. Both dimensions clamp to at least one
/// cell; a terminal can report zero mid-resize, and a zero-width frame
/// cannot be split into rows.
pub fn grid_size(width: Option<usize>, height: Option<usize>) -> (usize, usize) {
    let detected = terminal::size().ok();
    let w = width.unwrap_or_else(|| detected.map_or(DEFAULT_WIDTH, |(w, _)| w as usize));
    let h = height.unwrap_or_else(|| detected.map_or(DEFAULT_HEIGHT, |(_, h)| h as usize));
    (w.max(1), h.max(1))
}

/// Stream `frames` frames to stdout and return.
///
/// Frames are separated (not terminated) by a clear-and-home escape, so
/// `cat`-ing the output into a terminal replays the animation and piping a
/// single frame into a file keeps it clean. Time starts at zero and
/// advances `spin * 0.08` per frame.
pub fn print_frames(
    model: &Model,
    frames: u32,
    spin: f32,
    width: usize,
    height: usize,
    shades: &[char],
    opts: &RenderOptions,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut t = 0.0f32;
    for i in 0..frames {
        let frame = model.render(t, width, height, shades, opts);
        out.write_all(frame_to_ansi(&frame, "\n").as_bytes())?;
        if i + 1 < frames {
            out.write_all(b"\x1b[2J\x1b[H")?;
        }
        t += spin * 0.08;
    }
    out.flush()
}

/// Run the interactive animation until the user quits.
///
/// Keys: `q`/`Esc`/`Ctrl-C` quit, space pauses, `1`-`9` switch models,
/// `+`/`-` adjust spin. Sizes left as `None` follow live terminal resizes.
/// The terminal is restored on every exit path, including errors.
pub fn animate(
    model: &'static Model,
    spin: f32,
    width: Option<usize>,
    height: Option<usize>,
    fps: u32,
    shades: &[char],
    opts: &RenderOptions,
) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, DisableLineWrap, cursor::Hide, Clear(ClearType::All))?;
    terminal::enable_raw_mode()?;

    let res = run_loop(&mut out, model, spin, width, height, fps, shades, opts);

    let _ = execute!(out, ResetColor, cursor::Show, EnableLineWrap, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    res
}

fn run_loop(
    out: &mut io::Stdout,
    start: &'static Model,
    spin: f32,
    width: Option<usize>,
    height: Option<usize>,
    fps: u32,
    shades: &[char],
    opts: &RenderOptions,
) -> io::Result<()> {
    let frame_budget = Duration::from_secs_f32(1.0 / fps.max(1) as f32);
    let mut model = start;
    let mut spin = spin;
    let mut paused = false;
    let mut t = 0.0f32;
    let mut last = Instant::now();
    let mut prev_size = (0usize, 0usize);

    loop {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char(' ') => paused = !paused,
                    KeyCode::Char('+') | KeyCode::Char('=') => spin += 0.1,
                    KeyCode::Char('-') => spin -= 0.1,
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(idx) = c.to_digit(10).and_then(|d| d.checked_sub(1)) {
                            if let Some(m) = models::all().get(idx as usize) {
                                model = m;
                            }
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.25);
        last = now;
        if !paused {
            t += dt * spin;
        }

        let size = grid_size(width, height);
        if size != prev_size {
            debug!("grid now {}x{}", size.0, size.1);
            queue!(out, Clear(ClearType::All))?;
            prev_size = size;
        }

        let frame = model.render(t, size.0, size.1, shades, opts);
        for (y, row) in frame.rows().enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16), Print(row_to_ansi(row)))?;
        }
        out.flush()?;

        std::thread::sleep(frame_budget.saturating_sub(now.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;

    fn px(glyph: char, r: u8, g: u8, b: u8) -> Pixel {
        Pixel { glyph, color: Color::new(r, g, b) }
    }

    #[test]
    fn test_row_emits_escape_only_on_color_change() {
        let row = [px('a', 1, 2, 3), px('b', 1, 2, 3), px('c', 9, 8, 7)];
        let text = row_to_ansi(&row);
        assert_eq!(text.matches("\x1b[38;2;1;2;3m").count(), 1);
        assert!(text.contains("\x1b[38;2;1;2;3mab"));
        assert!(text.contains("\x1b[38;2;9;8;7mc"));
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_frame_rows_end_with_reset_and_newline() {
        let frame = Frame {
            width: 2,
            height: 2,
            pixels: vec![px('a', 0, 0, 0), px('b', 0, 0, 0), px('c', 0, 0, 0), px('d', 0, 0, 0)],
        };
        let text = frame_to_ansi(&frame, "\n");
        assert_eq!(text.matches("\x1b[0m\n").count(), 2);
        assert!(text.ends_with("\x1b[0m\n"));
        // one color run covers each row
        assert_eq!(text.matches("\x1b[38;2;0;0;0m").count(), 2);
    }

    #[test]
    fn test_explicit_grid_size_wins() {
        assert_eq!(grid_size(Some(33), Some(11)), (33, 11));
    }

    #[test]
    fn test_grid_size_never_resolves_to_zero_cells() {
        assert_eq!(grid_size(Some(0), Some(0)), (1, 1));
        let (w, h) = grid_size(None, None);
        assert!(w >= 1 && h >= 1);
    }
}
