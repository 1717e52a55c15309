//! `satmax bench`: repeated searches per scenario with a summary table.

use std::io::{self, Write};

use satmax::{run_benchmark, BenchmarkResult, SatMaxConfig, SatMaxError, SummaryTable};

use crate::cli::BenchArgs;

pub(crate) fn run(args: &BenchArgs, mut config: SatMaxConfig) -> Result<(), SatMaxError> {
    if let Some(solver) = &args.solver {
        config.oracle.command = solver.clone();
    }
    let settings = &mut config.benchmark;
    if !args.scenarios.is_empty() {
        settings.scenarios = args.scenarios.clone();
    }
    if let Some(runs) = args.runs {
        settings.runs = runs;
    }
    if let Some(warmup) = args.warmup {
        settings.warmup = warmup;
    }
    if let Some(dir) = &args.dir {
        settings.scenario_dir = dir.clone();
    }
    if let Some(csv) = &args.csv {
        settings.csv_output = Some(csv.clone());
    }
    if let Some(markdown) = &args.markdown {
        settings.markdown_output = Some(markdown.clone());
    }

    let results = run_benchmark(&config)?;

    let mut out = io::stdout().lock();
    write_runs(&mut out, &results)?;
    writeln!(out, "\n=== Summary (averages over runs) ===")?;
    write!(out, "{}", SummaryTable::to_string(&results))?;
    out.flush()?;
    Ok(())
}

pub(crate) fn write_runs<W: Write>(out: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "\n=== Scenario {}: {} runs ===", result.scenario, result.run_count())?;
        for run in &result.runs {
            writeln!(
                out,
                "  run {:2}: Utility={:.3}, time={:.2} ms, mem≈{}",
                run.run_index,
                run.utility,
                run.solve_time_ms(),
                match run.memory_mb() {
                    Some(mb) => format!("{mb:.2} MB"),
                    None => "n/a".to_string(),
                },
            )?;
        }
    }
    Ok(())
}
