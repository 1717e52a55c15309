//! Benchmark runner.

use std::marker::PhantomData;
use std::time::Instant;

use satmax_core::{ConstraintSet, Exchange, RoundCollector};
use satmax_solver::{ConstraintSource, Maximizer, ScenarioId};
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::memory::MemoryProbe;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Zero-erasure benchmark runner.
///
/// For each scenario the runner loads the constraint set once, builds one
/// maximizer from it, and calls `maximize` for every warmup and measured
/// run. The maximizer is reused across runs, so its round log keeps
/// growing like a long-lived process would.
///
/// # Type Parameters
///
/// * `Src` - Constraint source, e.g. a scenario directory
/// * `F` - Maximizer factory: `Fn(ConstraintSet) -> Maximizer<E, C>`
/// * `E` - Exchange used by the maximizer
/// * `C` - Round collector used by the maximizer
pub struct Benchmark<Src, F, E, C>
where
    Src: ConstraintSource,
    F: Fn(ConstraintSet) -> Maximizer<E, C>,
    E: Exchange,
    C: RoundCollector,
{
    config: BenchmarkConfig,
    source: Src,
    maximizer_factory: F,
    _phantom: PhantomData<fn() -> (E, C)>,
}

impl<Src, F, E, C> Benchmark<Src, F, E, C>
where
    Src: ConstraintSource,
    F: Fn(ConstraintSet) -> Maximizer<E, C>,
    E: Exchange,
    C: RoundCollector,
{
    /// Creates a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `config` - Benchmark configuration (warmup count, run count, interval)
    /// * `source` - Where scenario constraint sets are loaded from
    /// * `maximizer_factory` - Builds a maximizer for a loaded constraint set
    pub fn new(config: BenchmarkConfig, source: Src, maximizer_factory: F) -> Self {
        Self {
            config,
            source,
            maximizer_factory,
            _phantom: PhantomData,
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark for one scenario.
    ///
    /// # Errors
    ///
    /// Fails if the scenario cannot be loaded or any run fails; the error
    /// names the scenario and the run.
    pub fn run(&self, scenario: &ScenarioId) -> Result<BenchmarkResult, BenchmarkError> {
        let constraints = self
            .source
            .load(scenario)
            .map_err(|source| BenchmarkError::Load {
                scenario: scenario.to_string(),
                source,
            })?;
        let mut maximizer = (self.maximizer_factory)(constraints);
        let (min, max) = self.config.interval();
        let eps = self.config.eps();

        info!(
            event = "bench_start",
            scenario = %scenario,
            runs = self.config.run_count() as u64,
            warmup = self.config.warmup_count() as u64,
        );

        for warmup in 1..=self.config.warmup_count() {
            maximizer
                .maximize(min, max, eps)
                .map_err(|source| BenchmarkError::Warmup {
                    scenario: scenario.to_string(),
                    warmup,
                    source,
                })?;
        }

        let mut probe = MemoryProbe::current();
        let mut result = BenchmarkResult::new(self.config.name(), scenario.to_string());

        for run_index in 1..=self.config.run_count() {
            let started = Instant::now();
            let outcome =
                maximizer
                    .maximize(min, max, eps)
                    .map_err(|source| BenchmarkError::Maximize {
                        scenario: scenario.to_string(),
                        run: run_index,
                        source,
                    })?;
            let solve_time = started.elapsed();
            let memory_bytes = probe.as_mut().and_then(MemoryProbe::resident_bytes);

            let run = BenchmarkRun {
                run_index,
                solve_time,
                memory_bytes,
                utility: outcome.best,
                rounds: outcome.rounds,
            };
            debug!(
                event = "bench_run",
                scenario = %scenario,
                run = run_index as u64,
                utility = run.utility,
                time_ms = run.solve_time_ms(),
                mem_mb = run.memory_mb(),
            );
            result.add_run(run);
        }

        info!(
            event = "bench_end",
            scenario = %scenario,
            avg_ms = result.avg_solve_time().as_secs_f64() * 1000.0,
            avg_utility = result.avg_utility(),
        );

        Ok(result)
    }

    /// Runs every scenario in order, stopping at the first failure.
    pub fn run_all(&self, scenarios: &[ScenarioId]) -> Result<Vec<BenchmarkResult>, BenchmarkError> {
        scenarios.iter().map(|scenario| self.run(scenario)).collect()
    }
}

/// Builder for creating benchmarks with fluent API.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkBuilder {
    config: BenchmarkConfig,
}

impl BenchmarkBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: BenchmarkConfig::new(name),
        }
    }

    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.config = self.config.with_warmup_count(count);
        self
    }

    pub fn with_run_count(mut self, count: usize) -> Self {
        self.config = self.config.with_run_count(count);
        self
    }

    pub fn with_interval(mut self, min: f64, max: f64, eps: f64) -> Self {
        self.config = self.config.with_interval(min, max, eps);
        self
    }

    /// Builds the benchmark with the given source and maximizer factory.
    pub fn build<Src, F, E, C>(self, source: Src, maximizer_factory: F) -> Benchmark<Src, F, E, C>
    where
        Src: ConstraintSource,
        F: Fn(ConstraintSet) -> Maximizer<E, C>,
        E: Exchange,
        C: RoundCollector,
    {
        Benchmark::new(self.config, source, maximizer_factory)
    }
}
