//! Minimal interactive host for the content separator control.
//!
//! Runs the full lifecycle against a real terminal: resolves a parameter
//! bag, mounts the control, forwards focused key events, and pulls outputs
//! whenever the control signals a change. Esc or Ctrl+C quits and prints
//! the final bound value.
//!
//! ```sh
//! cargo run -p splitfield-control --example form_host
//! ```

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*, widgets::Paragraph};
use splitfield_control::render::{mount_height, render_mount};
use splitfield_control::{ContentSeparator, Context, FieldControl, HostServices, Mount};
use splitfield_types::{ControlError, ParameterBag, param};
use tracing::warn;

/// Host shim: remembers that outputs went stale and keeps faults around.
#[derive(Default)]
struct FormHost {
    dirty: bool,
    faults: Vec<ControlError>,
}

impl HostServices for FormHost {
    fn output_changed(&mut self) {
        self.dirty = true;
    }

    fn report_error(&mut self, error: ControlError) {
        warn!(%error, "control fault");
        self.faults.push(error);
    }
}

fn main() -> Result<()> {
    init_tracing();

    let parameters = ParameterBag::new()
        .with(param::LEFT_CONTENT, true)
        .with(param::EDIT_MODE, true)
        .with(param::SEPARATOR, ",")
        .with(param::CONTENT_SEPARATOR_VALUE, "Hello , World")
        .with(param::LABEL_VALUE, "Greeting,Subject")
        .with(param::LABEL_DISPLAY, true);

    let mut control = ContentSeparator::new();
    let mut host = FormHost::default();
    let mut mount = Mount::new();
    control.init(&Context::new(parameters), &mut host, &mut mount);

    let mut terminal = setup_terminal()?;
    let run = run_loop(&mut terminal, &mut control, &mut host, &mut mount);
    cleanup_terminal(&mut terminal)?;
    run?;

    control.destroy();
    let outputs = control.outputs();
    mount.clear();

    println!(
        "{} = {:?}",
        param::CONTENT_SEPARATOR_VALUE,
        outputs.text(param::CONTENT_SEPARATOR_VALUE).unwrap_or_default()
    );
    for fault in &host.faults {
        println!("fault: {fault}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    control: &mut ContentSeparator,
    host: &mut FormHost,
    mount: &mut Mount,
) -> Result<()> {
    let mut synced = pull_value(control);

    loop {
        terminal.draw(|frame| draw(frame, mount, &synced, host.faults.len()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key)
                if key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)) =>
            {
                return Ok(());
            }
            Event::Key(key) => {
                control.handle_key(key, host, mount);
                if host.dirty {
                    host.dirty = false;
                    synced = pull_value(control);
                }
            }
            _ => {}
        }
    }
}

fn pull_value(control: &ContentSeparator) -> String {
    control
        .outputs()
        .text(param::CONTENT_SEPARATOR_VALUE)
        .unwrap_or_default()
        .to_string()
}

fn draw(frame: &mut Frame, mount: &Mount, synced: &str, fault_count: usize) {
    // Size the body to the mounted tree so the footer sits right below it.
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(mount_height(mount)),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("content separator demo (Esc quits)"),
        header,
    );
    render_mount(frame, body, mount);
    frame.render_widget(
        Paragraph::new(format!("stored: {synced}   faults: {fault_count}")),
        footer,
    );
}
