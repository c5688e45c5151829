//codepad/src/main.rs
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use codepad::app::Workbench;
use codepad::kernel::services::adapters::{
    ensure_settings_file, load_settings, AsyncRuntime, LogFlushSink, StaticContentSource,
};
use codepad::kernel::AppState;
use codepad::models::{sample_contents, sample_tree, NodeId};

mod logging;

const INPUT_POLL: Duration = Duration::from_millis(50);

enum Input {
    Line(String),
    Closed,
}

fn main() -> io::Result<()> {
    let logging_guard = logging::init();

    let tree = sample_tree().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    match ensure_settings_file() {
        Ok(path) => tracing::info!(path = %path.display(), "settings file ready"),
        Err(e) => tracing::warn!(error = %e, "settings file unavailable, using defaults"),
    }
    let settings = load_settings();
    let runtime = AsyncRuntime::new()?;

    let mut workbench = Workbench::new(
        AppState::new(tree, settings.editor),
        runtime.tokio_handle(),
        Arc::new(StaticContentSource::new(sample_contents())),
        Arc::new(LogFlushSink),
    );

    let (input_tx, input_rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Closed);
    });

    let mut out = io::stdout();
    if let Some(guard) = &logging_guard {
        writeln!(out, "logs: {}", guard.log_dir().display())?;
    }
    print_tree(&mut out, &workbench)?;

    loop {
        let flushed_before = workbench.state().session.last_flushed_at();
        workbench.tick();
        if workbench.state().session.last_flushed_at() != flushed_before {
            writeln!(out, "[autosaved]")?;
        }

        match input_rx.recv_timeout(INPUT_POLL) {
            Ok(Input::Line(line)) => {
                if !run_command(&mut out, &mut workbench, line.trim_end())? {
                    break;
                }
            }
            Ok(Input::Closed) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    workbench.teardown();
    Ok(())
}

fn run_command(out: &mut impl Write, workbench: &mut Workbench, line: &str) -> io::Result<bool> {
    let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
    match cmd {
        "" => {}
        "tree" => print_tree(out, workbench)?,
        "open" | "click" => {
            workbench.activate(&NodeId::new(arg.trim()));
            print_tree(out, workbench)?;
        }
        "edit" => {
            workbench.edit(arg.replace("\\n", "\n"));
            print_status(out, workbench)?;
        }
        "show" => print_buffer(out, workbench)?,
        "close" => {
            workbench.close_document();
            print_status(out, workbench)?;
        }
        "autosave" => {
            let mut settings = workbench.state().settings.clone();
            settings.auto_save = arg.trim() != "off";
            workbench.apply_settings(settings);
            writeln!(out, "autosave {}", if workbench.autosave_running() { "on" } else { "off" })?;
        }
        "quit" | "exit" => return Ok(false),
        _ => writeln!(
            out,
            "commands: tree | open <id> | edit <text> | show | close | autosave on|off | quit"
        )?,
    }
    Ok(true)
}

fn print_tree(out: &mut impl Write, workbench: &Workbench) -> io::Result<()> {
    for row in workbench.snapshot().rows {
        let marker = match (row.is_folder, row.is_expanded) {
            (true, true) => "v",
            (true, false) => ">",
            (false, _) => " ",
        };
        let selected = if row.is_selected { "*" } else { " " };
        writeln!(
            out,
            "{}{}{} {} [{}]",
            selected,
            "  ".repeat(row.depth as usize),
            marker,
            row.name,
            row.id
        )?;
    }
    Ok(())
}

fn print_status(out: &mut impl Write, workbench: &Workbench) -> io::Result<()> {
    let snap = workbench.snapshot();
    match snap.title {
        Some(title) => writeln!(
            out,
            "{} [{}] {} lines={} dirty={}",
            title,
            snap.extension_badge.unwrap_or_default(),
            snap.language.map_or("plaintext", |lang| lang.language_id()),
            snap.line_count,
            snap.dirty
        ),
        None => writeln!(out, "no document open"),
    }
}

fn print_buffer(out: &mut impl Write, workbench: &Workbench) -> io::Result<()> {
    print_status(out, workbench)?;
    let snap = workbench.snapshot();
    let numbers = snap.line_numbers();
    let rendered = workbench.rendered_buffer();
    for (idx, line) in rendered.split('\n').enumerate() {
        match numbers.get(idx) {
            Some(n) => writeln!(out, "{:>4} | {}", n, line)?,
            None => writeln!(out, "{}", line)?,
        }
    }
    Ok(())
}
