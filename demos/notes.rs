//! Notes Example - An entry with placeholder, max length, and focus events.
//!
//! Type into a note field wired to a `TextEntry`:
//! - placeholder shows while empty (focused or not)
//! - input is clamped to 60 characters, with a bell on overflow
//! - Alt+Enter inserts a newline, Enter submits, Esc quits
//!
//! Run with: cargo run --example notes

use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::MoveToColumn;
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use entrybox::{
    disable_focus_change, enable_focus_change, poll_event, EntryEvent, FontStyle, Rgba, RowId,
    TerminalSurface, TextEntry,
};

fn redraw(entry: &TextEntry) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    queue!(out, Print("note> "))?;
    if !entry.placeholder_visible() {
        queue!(out, Print(entry.text().replace('\n', " / ")))?;
    }
    out.flush()
    // When the placeholder is visible the entry asks the surface to draw
    // the overlay itself, right after this prompt.
}

fn main() -> std::io::Result<()> {
    let entry = Rc::new(TextEntry::new());
    let surface = Rc::new(TerminalSurface::multiline());

    entry.set_placeholder("Describe the artwork...");
    entry.set_placeholder_color(Rgba::GRAY);
    entry.set_placeholder_font(FontStyle::DIM | FontStyle::ITALIC);
    entry.set_row(RowId::new(0, 0));

    entry.configure_max_length(60, |_| {
        // Overflow feedback: terminal bell.
        print!("\x07");
        let _ = stdout().flush();
    });
    entry.on_begin_edit(|_| {
        let _ = execute!(stdout(), Print("\r\n[editing]\r\n"));
    });
    entry.on_end_edit(|state| {
        let _ = execute!(stdout(), Print(format!("\r\n[paused: {:?}]\r\n", state.text)));
    });

    enable_raw_mode()?;
    enable_focus_change()?;
    entry.attach_surface(surface.clone());
    entry.focus_gained();
    redraw(&entry)?;

    loop {
        let Some(event) = poll_event(Duration::from_millis(16))? else {
            continue;
        };

        match event {
            EntryEvent::Cancel => break,
            EntryEvent::Submit => {
                execute!(
                    stdout(),
                    Print(format!(
                        "\r\nsubmitted ({} lines): {:?}\r\n",
                        entry.height(),
                        entry.text()
                    ))
                )?;
                // Clear through the surface so state and storage stay in sync.
                while !entry.text().is_empty() {
                    surface.apply(&EntryEvent::Backspace, &entry);
                }
            }
            other => surface.apply(&other, &entry),
        }

        redraw(&entry)?;
    }

    entry.focus_lost();
    disable_focus_change()?;
    disable_raw_mode()?;
    println!();
    Ok(())
}
