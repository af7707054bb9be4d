//! Application configuration from CLI flags and environment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use squarepool_core::{RunOptions, SquareError, DEFAULT_INPUTS, DEFAULT_WORKER_COUNT};

/// squarepool: compare sequential and thread-pool execution of a slow square task.
#[derive(Parser, Debug)]
#[command(name = "squarepool", version, about)]
pub struct AppConfig {
    /// Comma-separated integers to square (empty string for none).
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        value_parser = parse_input_list,
        default_value_t = InputList::default(),
        env = "SQUAREPOOL_INPUTS"
    )]
    pub inputs: InputList,

    /// Number of worker threads in the pool.
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT, env = "SQUAREPOOL_WORKERS")]
    pub workers: usize,

    /// Artificial delay per task (e.g., "500ms", "1s", "0.25").
    #[arg(long, default_value = "500ms", env = "SQUAREPOOL_DELAY")]
    pub delay: String,

    /// Strategy to run: sequential, pooled, or all.
    #[arg(short, long, default_value = "all")]
    pub strategy: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the result sequences).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a JSON summary instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON summary to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Ordered list of inputs given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputList(pub Vec<i64>);

impl Default for InputList {
    fn default() -> Self {
        Self(DEFAULT_INPUTS.to_vec())
    }
}

impl fmt::Display for InputList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Parse "2,3,-4" into a list; a blank string is the empty list.
fn parse_input_list(s: &str) -> Result<InputList, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(InputList(Vec::new()));
    }
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|e| format!("invalid integer {part:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(InputList)
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Inputs to square, in order.
    #[must_use]
    pub fn inputs(&self) -> &[i64] {
        &self.inputs.0
    }

    /// Parse the delay string into a Duration.
    pub fn delay_duration(&self) -> Result<Duration, SquareError> {
        parse_duration(&self.delay)
            .ok_or_else(|| SquareError::Config(format!("invalid delay: {:?}", self.delay)))
    }

    /// Build validated run options.
    pub fn run_options(&self) -> Result<RunOptions, SquareError> {
        let opts = RunOptions::new(self.delay_duration()?, self.workers);
        opts.validate()?;
        Ok(opts)
    }
}

/// Parse a duration string like "500ms", "1.5s", "2m", "1h", or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        parse_secs(secs)
    } else {
        parse_secs(s)
    }
}

fn parse_secs(s: &str) -> Option<Duration> {
    let secs: f64 = s.parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}
