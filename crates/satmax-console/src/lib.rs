//! Colorful console output for SatMax searches.
//!
//! Provides a custom `tracing` layer that formats search and benchmark
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (search and benchmark start/end)
//! - **DEBUG**: Individual oracle rounds and benchmark runs
//! - **TRACE**: Raw solver invocations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the SatMax banner and sets up tracing. `RUST_LOG` overrides
/// the default level.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Like [`init`], with rounds shown when `level` is DEBUG or finer.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(directive("satmax_solver", level))
            .from_env_lossy()
            .add_directive(directive("satmax_benchmark", level));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SatMaxConsoleLayer)
            .try_init();
    });
}

fn directive(target: &str, level: LevelFilter) -> Directive {
    format!("{}={}", target, level)
        .parse()
        .unwrap_or_else(|_| level.into())
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since search start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____        _   __  __
/ ___|  __ _| |_|  \/  | __ ___  __
\___ \ / _` | __| |\/| |/ _` \ \/ /
 ___) | (_| | |_| |  | | (_| |>  <
|____/ \__,_|\__|_|  |_|\__,_/_/\_\
"#;

    let version_line = format!("        v{} - SMT Threshold Maximizer\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SatMaxConsoleLayer;

impl<S: Subscriber> Layer<S> for SatMaxConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        if !target.starts_with("satmax_solver")
            && !target.starts_with("satmax_benchmark")
            && !target.starts_with("satmax::")
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    objective: Option<String>,
    status: Option<String>,
    scenario: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    eps: Option<f64>,
    threshold: Option<f64>,
    model_utility: Option<f64>,
    best: Option<f64>,
    utility: Option<f64>,
    avg_utility: Option<f64>,
    time_ms: Option<f64>,
    avg_ms: Option<f64>,
    mem_mb: Option<f64>,
    constraint_bytes: Option<u64>,
    round: Option<u64>,
    rounds: Option<u64>,
    duration_ms: Option<u64>,
    runs: Option<u64>,
    warmup: Option<u64>,
    run: Option<u64>,
    shortcut: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "objective" => self.objective = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "scenario" => self.scenario = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "min" => self.min = Some(value),
            "max" => self.max = Some(value),
            "eps" => self.eps = Some(value),
            "threshold" => self.threshold = Some(value),
            "model_utility" => self.model_utility = Some(value),
            "best" => self.best = Some(value),
            "utility" => self.utility = Some(value),
            "avg_utility" => self.avg_utility = Some(value),
            "time_ms" => self.time_ms = Some(value),
            "avg_ms" => self.avg_ms = Some(value),
            "mem_mb" => self.mem_mb = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "constraint_bytes" => self.constraint_bytes = Some(value),
            "round" => self.round = Some(value),
            "rounds" => self.rounds = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "runs" => self.runs = Some(value),
            "warmup" => self.warmup = Some(value),
            "run" => self.run = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "shortcut" {
            self.shortcut = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "round" => format_round(v),
        "search_end" => format_search_end(v),
        "bench_start" => format_bench_start(v),
        "bench_run" => format_bench_run(v),
        "bench_end" => format_bench_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let objective = v.objective.as_deref().unwrap_or("Utility");
    let bytes = v.constraint_bytes.unwrap_or(0);

    format!(
        "{} {} Maximizing {} │ [{}, {}] │ eps {} │ {} bytes of constraints",
        format_elapsed(),
        "▶".bright_green().bold(),
        objective.white().bold(),
        v.min.unwrap_or(0.0).bright_yellow(),
        v.max.unwrap_or(0.0).bright_yellow(),
        v.eps.unwrap_or(0.0).bright_yellow(),
        bytes.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_round(v: &EventVisitor) -> String {
    let sat = v.status.as_deref() == Some("SAT");
    let icon = if sat {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    let model = match v.model_utility {
        Some(u) => format!("model {}", u).bright_magenta().to_string(),
        None => "no model".bright_black().to_string(),
    };

    format!(
        "{} {} Round {:>3} │ > {:<10.6} │ {}",
        format_elapsed(),
        icon,
        v.round.unwrap_or(0),
        v.threshold.unwrap_or(0.0),
        model
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let best = v.best.unwrap_or(0.0);
    let rounds = v.rounds.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} Search complete │ best {} │ {} rounds │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format!("{:.3}", best).bright_green().bold(),
        rounds.to_formatted_string(&Locale::en).white(),
        format_duration_ms(duration).yellow(),
    );
    if v.shortcut == Some(true) {
        output.push_str(&format!(" │ {}", "upper bound feasible".bright_yellow()));
    }
    output
}

fn format_bench_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Scenario {} │ {} runs │ {} warmup",
        format_elapsed(),
        "▶".bright_blue(),
        v.scenario.as_deref().unwrap_or("?").white().bold(),
        v.runs.unwrap_or(0).bright_yellow(),
        v.warmup.unwrap_or(0).bright_yellow(),
    )
}

fn format_bench_run(v: &EventVisitor) -> String {
    // mem_mb is absent when the process could not be sampled.
    let mem = match v.mem_mb {
        Some(mb) => format!("{mb:.2} MB"),
        None => "n/a".to_string(),
    };
    format!(
        "{} {} run {:>2}: Utility={:.3}, time={:.2} ms, mem≈{}",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.run.unwrap_or(0),
        v.utility.unwrap_or(0.0),
        v.time_ms.unwrap_or(0.0),
        mem,
    )
}

fn format_bench_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Scenario {} done │ avg {:.2} ms │ avg Utility {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.scenario.as_deref().unwrap_or("?").white().bold(),
        v.avg_ms.unwrap_or(0.0),
        format!("{:.3}", v.avg_utility.unwrap_or(0.0)).bright_green(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
