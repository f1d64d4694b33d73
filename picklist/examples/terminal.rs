//! Interactive list in the terminal.
//!
//! Arrows move focus, Shift+arrows toggle, Space/Shift+Space select,
//! Ctrl+A selects all, Ctrl+Shift+Home/End extend, click/Ctrl+click/Shift+click
//! work on rows. `q` or Esc quits. Logs go to `picklist-terminal.log`.

use std::fs::File;
use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event as CtEvent, KeyCode};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use picklist::prelude::*;
use picklist::terminal::{click_modifiers, key_combo};
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};

/// First screen row used by list items.
const LIST_TOP: u16 = 2;

fn main() -> io::Result<()> {
    let log_file = File::create("picklist-terminal.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mode = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<SelectionMode>())
        .transpose()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .unwrap_or_default();

    let mut list = ItemCollection::with_selection_mode(mode);
    list.load(sample_records())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut list);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, list: &mut ItemCollection<Value>) -> io::Result<()> {
    let mut status = String::new();
    render(stdout, list, &status)?;

    loop {
        match event::read()? {
            CtEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                return Ok(());
            }
            CtEvent::Key(key) => {
                let Some(combo) = key_combo(&key) else {
                    continue;
                };
                let (_, events) = list.handle_key(&combo);
                if let Some(activate) = events.activate {
                    status = format!("activated {}", activate.id);
                } else if let Some(menu) = events.context_menu {
                    status = format!("context menu for {}", menu.id);
                }
            }
            CtEvent::Mouse(mouse) => {
                let Some(modifiers) = click_modifiers(&mouse) else {
                    continue;
                };
                let Some(row) = mouse.row.checked_sub(LIST_TOP) else {
                    continue;
                };
                if usize::from(row) >= list.len() {
                    continue;
                }
                list.handle_click(row as isize, modifiers);
            }
            _ => {}
        }

        if list.needs_render() || !status.is_empty() {
            render(stdout, list, &status)?;
        }
    }
}

fn render(stdout: &mut Stdout, list: &mut ItemCollection<Value>, status: &str) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print(format!(
            "picklist ({} selection) - {} of {} selected",
            list.selection_mode(),
            list.selected_indices().len(),
            list.len()
        ))
    )?;

    for (row, item) in list.iter().enumerate() {
        let marker = if item.is_selected() { "[x]" } else { "[ ]" };
        let label = item.data()["label"].as_str().unwrap_or_default();
        queue!(stdout, cursor::MoveTo(0, LIST_TOP + row as u16))?;
        if item.is_focused() {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            stdout,
            Print(format!("{} {:<12} {}", marker, item.id(), label)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    let footer = LIST_TOP + list.len() as u16 + 1;
    queue!(stdout, cursor::MoveTo(0, footer), Print(status))?;
    stdout.flush()?;

    // Rows are drawn; a terminal has no per-row input focus, so just log it
    list.render_complete(&mut |id: &str| {
        log::debug!("focus now on row {}", id);
        true
    });
    Ok(())
}

fn sample_records() -> Vec<Value> {
    vec![
        json!({ "id": "readme", "label": "README.md" }),
        json!({ "label": "Cargo.toml" }),
        json!({ "label": "src/" }),
        json!({ "id": "license", "label": "LICENSE" }),
        json!({ "label": "tests/" }),
        json!({ "label": "target/" }),
    ]
}
