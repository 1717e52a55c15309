//! Report generation for benchmark results.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// One row per measured run.
///
/// # Example
///
/// ```
/// use satmax_benchmark::{BenchmarkResult, BenchmarkRun, CsvExporter};
/// use std::time::Duration;
///
/// let mut result = BenchmarkResult::new("Test", "1");
/// result.add_run(BenchmarkRun {
///     run_index: 1,
///     solve_time: Duration::from_millis(100),
///     memory_bytes: Some(2 * 1024 * 1024),
///     utility: 0.594,
///     rounds: 8,
/// });
///
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("scenario,run_index,solve_time_ms"));
/// assert!(csv.contains("1,1,100.00,2.00,0.594,8"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports one scenario's runs to a CSV string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        Csv(std::slice::from_ref(result)).to_string()
    }

    /// Exports several scenarios into one CSV string with a single header.
    pub fn to_string_all(results: &[BenchmarkResult]) -> String {
        Csv(results).to_string()
    }

    pub fn to_file(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string_all(results))
    }

    pub fn write<W: Write>(results: &[BenchmarkResult], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string_all(results).as_bytes())
    }
}

struct Csv<'a>(&'a [BenchmarkResult]);

impl fmt::Display for Csv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario,run_index,solve_time_ms,memory_mb,utility,rounds")?;
        for result in self.0 {
            for run in &result.runs {
                writeln!(
                    f,
                    "{},{},{:.2},{:.2},{:.3},{}",
                    result.scenario,
                    run.run_index,
                    run.solve_time_ms(),
                    Mb(run.memory_mb()),
                    run.utility,
                    run.rounds,
                )?;
            }
        }
        Ok(())
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use satmax_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new("Test", "3");
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report for one scenario.
    pub fn to_string(result: &BenchmarkResult) -> String {
        Markdown(result).to_string()
    }

    /// Generates a comparison table across scenarios.
    pub fn comparison(results: &[BenchmarkResult]) -> String {
        Comparison(results).to_string()
    }

    /// Writes one report per scenario followed by the comparison table.
    pub fn to_file(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
        let mut md = String::new();
        for result in results {
            md.push_str(&Self::to_string(result));
            md.push('\n');
        }
        md.push_str(&Self::comparison(results));
        fs::write(path, md)
    }
}

struct Markdown<'a>(&'a BenchmarkResult);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "# Benchmark: {}", result.name)?;
        writeln!(f)?;
        writeln!(f, "- **Scenario**: {}", result.scenario)?;
        writeln!(f, "- **Runs**: {}", result.run_count())?;
        writeln!(f)?;

        writeln!(f, "## Summary")?;
        writeln!(f)?;
        if result.runs.is_empty() {
            writeln!(f, "*No runs completed.*")?;
            return Ok(());
        }

        writeln!(f, "| Metric | Min | Avg | Max |")?;
        writeln!(f, "|--------|-----|-----|-----|")?;
        writeln!(
            f,
            "| Time (ms) | {:.2} | {:.2} | {:.2} |",
            ms(result.min_solve_time()),
            ms(result.avg_solve_time()),
            ms(result.max_solve_time()),
        )?;
        writeln!(
            f,
            "| Memory (MB) | {:.2} | {:.2} | {:.2} |",
            Mb(result.min_memory_mb()),
            Mb(result.avg_memory_mb()),
            Mb(result.max_memory_mb()),
        )?;
        writeln!(
            f,
            "| Utility | {:.3} | {:.3} | {:.3} |",
            result.min_utility(),
            result.avg_utility(),
            result.max_utility(),
        )?;
        writeln!(f)?;

        writeln!(f, "## Run Details")?;
        writeln!(f)?;
        writeln!(f, "| Run | Time (ms) | Memory (MB) | Utility | Rounds |")?;
        writeln!(f, "|-----|-----------|-------------|---------|--------|")?;
        for run in &result.runs {
            writeln!(
                f,
                "| {} | {:.2} | {:.2} | {:.3} | {} |",
                run.run_index,
                run.solve_time_ms(),
                Mb(run.memory_mb()),
                run.utility,
                run.rounds,
            )?;
        }
        Ok(())
    }
}

struct Comparison<'a>(&'a [BenchmarkResult]);

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Comparison")?;
        writeln!(f)?;
        writeln!(f, "| Scenario | Runs | Avg Time (ms) | Avg Memory (MB) | Avg Utility |")?;
        writeln!(f, "|----------|------|---------------|-----------------|-------------|")?;
        for result in self.0 {
            writeln!(
                f,
                "| {} | {} | {:.2} | {:.2} | {:.3} |",
                result.scenario,
                result.run_count(),
                ms(result.avg_solve_time()),
                Mb(result.avg_memory_mb()),
                result.avg_utility(),
            )?;
        }
        Ok(())
    }
}

/// Plain-text summary, one line per scenario.
///
/// # Example
///
/// ```
/// use satmax_benchmark::{BenchmarkResult, SummaryTable};
///
/// let table = SummaryTable::to_string(&[BenchmarkResult::new("Test", "1")]);
/// assert!(table.starts_with("Scenario | Runs | Time_min(ms)"));
/// ```
pub struct SummaryTable;

impl SummaryTable {
    pub const HEADER: &'static str = "Scenario | Runs | Time_min(ms) | Time_avg(ms) | Time_max(ms) | \
         Mem_min(MB) | Mem_avg(MB) | Mem_max(MB) | U_min | U_avg | U_max";

    pub fn to_string(results: &[BenchmarkResult]) -> String {
        Summary(results).to_string()
    }
}

struct Summary<'a>(&'a [BenchmarkResult]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SummaryTable::HEADER)?;
        writeln!(f, "{}", "-".repeat(SummaryTable::HEADER.len()))?;
        for r in self.0 {
            writeln!(
                f,
                "{:>8} | {:4} | {:11.2} | {:11.2} | {:11.2} | {:11.2} | {:11.2} | {:11.2} | {:.3} | {:.3} | {:.3}",
                r.scenario,
                r.run_count(),
                ms(r.min_solve_time()),
                ms(r.avg_solve_time()),
                ms(r.max_solve_time()),
                Mb(r.min_memory_mb()),
                Mb(r.avg_memory_mb()),
                Mb(r.max_memory_mb()),
                r.min_utility(),
                r.avg_utility(),
                r.max_utility(),
            )?;
        }
        Ok(())
    }
}

fn ms(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Megabytes, or `n/a` right-aligned to the requested width.
struct Mb(Option<f64>);

impl fmt::Display for Mb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(mb) => fmt::Display::fmt(&mb, f),
            None => write!(f, "{:>width$}", "n/a", width = f.width().unwrap_or(0)),
        }
    }
}
