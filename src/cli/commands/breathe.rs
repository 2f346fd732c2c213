//! Breathing commands.
//!
//! `breathe` opens the full-screen exercise, or with `--plain` streams each
//! notification as a line. `techniques` lists the technique table.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{BreatheArgs, OutputFormat};
use crate::config::BreathingConfig;
use crate::error::PsySafeError;
use crate::features::breathing::{
    format_elapsed, parse_duration, BreathAction, BreathingSequencer, Clock, PresentationSink,
    Technique, IDLE_INSTRUCTION,
};
use crate::output::format_techniques;
use crate::tui::{self, BreatheOptions};

/// Sink that writes one line per notification.
pub struct ConsoleSink<W: Write> {
    out: W,
    format: OutputFormat,
    show_elapsed: bool,
}

impl<W: Write> ConsoleSink<W> {
    /// Write to `out` in `format`.
    pub const fn new(out: W, format: OutputFormat, show_elapsed: bool) -> Self {
        Self {
            out,
            format,
            show_elapsed,
        }
    }

    /// The underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, pretty: &str, value: &serde_json::Value) {
        let line = match self.format {
            OutputFormat::Pretty => pretty.to_string(),
            OutputFormat::Json => value.to_string(),
        };
        writeln!(self.out, "{line}").ok();
        self.out.flush().ok();
    }
}

fn action_color(action: BreathAction) -> colored::Color {
    match action {
        BreathAction::Inhale => colored::Color::Cyan,
        BreathAction::Hold => colored::Color::Yellow,
        BreathAction::Exhale => colored::Color::Green,
        BreathAction::Pause => colored::Color::White,
    }
}

impl<W: Write> PresentationSink for ConsoleSink<W> {
    fn on_phase_change(&mut self, label: &str, action: BreathAction) {
        let pretty = format!(
            "{} {}",
            format!("[{action}]").dimmed(),
            label.color(action_color(action)).bold()
        );
        self.emit(
            &pretty,
            &json!({ "event": "phase", "label": label, "action": action }),
        );
    }

    fn on_elapsed_tick(&mut self, elapsed: &str) {
        if self.show_elapsed {
            self.emit(
                &elapsed.dimmed().to_string(),
                &json!({ "event": "tick", "elapsed": elapsed }),
            );
        }
    }

    fn on_idle(&mut self) {
        self.emit(IDLE_INSTRUCTION, &json!({ "event": "idle" }));
    }
}

/// Drive a started sequencer until `limit` has passed, or forever.
///
/// `wait` blocks for the given time; the real host sleeps, tests advance a
/// manual clock. Returns the session length at the stop.
pub fn run_plain<S, C, F>(
    sequencer: &mut BreathingSequencer<S, C>,
    limit: Option<Duration>,
    mut wait: F,
) -> Duration
where
    S: PresentationSink,
    C: Clock,
    F: FnMut(Duration),
{
    loop {
        sequencer.run_due();

        let elapsed = sequencer.elapsed().unwrap_or_default();
        if let Some(limit) = limit {
            if elapsed >= limit {
                sequencer.stop();
                return elapsed;
            }
        }

        let mut timeout = sequencer
            .time_until_next()
            .unwrap_or(Duration::from_millis(100));
        if let Some(limit) = limit {
            timeout = timeout.min(limit.saturating_sub(elapsed));
        }
        wait(timeout);
    }
}

/// Execute the breathe command.
///
/// # Errors
///
/// Returns an error for an unknown technique, a bad duration or a terminal
/// failure.
pub fn breathe(
    args: BreatheArgs,
    config: &BreathingConfig,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    let autostart = args.technique.is_some() || args.plain;
    let technique = args
        .technique
        .unwrap_or_else(|| config.default_technique.clone());
    Technique::lookup(&technique)?;

    let limit = args
        .duration
        .as_deref()
        .map(|d| {
            parse_duration(d).ok_or_else(|| {
                PsySafeError::Validation(format!(
                    "Invalid duration '{d}' (examples: 90s, 5m, 1h30m)"
                ))
            })
        })
        .transpose()?;

    if !args.plain {
        tui::run(&BreatheOptions {
            technique,
            autostart,
            tick_interval: config.tick_interval(),
            limit,
            show_elapsed: config.show_elapsed,
        })?;
        return Ok(String::new());
    }

    let sink = ConsoleSink::new(std::io::stdout(), format, config.show_elapsed);
    let mut sequencer = BreathingSequencer::new(sink).tick_interval(config.tick_interval());
    sequencer.start(&technique)?;
    let elapsed = run_plain(&mut sequencer, limit, std::thread::sleep);

    match format {
        OutputFormat::Json => Ok(String::new()),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Session complete:".green(),
            format_elapsed(elapsed.as_secs())
        )),
    }
}

/// Execute the techniques command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn techniques(format: OutputFormat) -> Result<String, PsySafeError> {
    format_techniques(Technique::all(), format)
}
