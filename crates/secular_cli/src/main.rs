mod system_file;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use secular_core::{
    DEFAULT_ZERO_TOLERANCE, SecularConfig, SecularReport, TwoBodySystem, secular_frequencies_with,
};
use secular_laplace::{
    DEFAULT_SAMPLES, DEFAULT_TERMS, LaplaceEvaluator, QuadratureConfig, QuadratureLaplace,
    SeriesConfig, SeriesLaplace, alpha_grid, sweep,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use system_file::{SystemOverrides, load_system};

#[derive(Parser)]
#[command(name = "secular", about = "Two-planet Laplace-Lagrange secular frequencies")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Quadrature,
    Series,
}

#[derive(Subcommand)]
enum Commands {
    /// Precession period and mode amplitudes (defaults to Jupiter-Saturn)
    Frequencies {
        /// TOML system file
        #[arg(long)]
        system: Option<PathBuf>,
        #[command(flatten)]
        overrides: SystemOverrides,
        /// Phase samples for the quadrature
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Eigenvalue magnitude treated as zero, rad/yr
        #[arg(long, default_value_t = DEFAULT_ZERO_TOLERANCE)]
        tolerance: f64,
        /// Laplace coefficient strategy
        #[arg(long, value_enum, default_value_t = Strategy::Quadrature)]
        strategy: Strategy,
        /// Terms kept by the series strategy
        #[arg(long, default_value_t = DEFAULT_TERMS)]
        series_terms: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Single Laplace coefficient b(3/2, j)(alpha) / (3 alpha)
    Laplace {
        /// Semi-major-axis ratio in (0, 1)
        #[arg(long)]
        alpha: f64,
        /// Harmonic index j
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        harmonic: i32,
        /// Phase samples for the quadrature
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Also evaluate the truncated series and report the difference
        #[arg(long)]
        compare: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Tabulate the coefficient over an alpha range
    Sweep {
        /// First ratio
        #[arg(long, default_value_t = 0.05)]
        from: f64,
        /// Last ratio
        #[arg(long, default_value_t = 0.95)]
        to: f64,
        /// Number of points, ends included
        #[arg(long, default_value_t = 19)]
        steps: usize,
        /// Harmonic index j
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        harmonic: i32,
        /// Phase samples for the quadrature
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct LaplaceOutput {
    alpha: f64,
    harmonic: i32,
    quadrature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relative_difference: Option<f64>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_evaluator(
    strategy: Strategy,
    samples: usize,
    series_terms: usize,
) -> Result<Box<dyn LaplaceEvaluator>> {
    let evaluator: Box<dyn LaplaceEvaluator> = match strategy {
        Strategy::Quadrature => Box::new(QuadratureLaplace::new(QuadratureConfig::new(samples))?),
        Strategy::Series => Box::new(SeriesLaplace::new(SeriesConfig::new(series_terms))?),
    };
    Ok(evaluator)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialising output")?;
    println!("{text}");
    Ok(())
}

fn run_frequencies(
    system: Option<PathBuf>,
    overrides: &SystemOverrides,
    samples: usize,
    tolerance: f64,
    strategy: Strategy,
    series_terms: usize,
    json: bool,
) -> Result<()> {
    let base = match system {
        Some(path) => load_system(&path)?,
        None => TwoBodySystem::jupiter_saturn(),
    };
    let system = overrides.apply(base);
    let config = SecularConfig::default()
        .with_samples(samples)
        .with_zero_tolerance(tolerance);
    let evaluator = build_evaluator(strategy, samples, series_terms)?;

    let result = secular_frequencies_with(&system, &config, evaluator.as_ref())?;
    let report = SecularReport::new(&system, &result, evaluator.name());
    if json {
        print_json(&report)
    } else {
        print!("{report}");
        Ok(())
    }
}

fn run_laplace(alpha: f64, harmonic: i32, samples: usize, compare: bool, json: bool) -> Result<()> {
    let quad = QuadratureLaplace::new(QuadratureConfig::new(samples))?;
    let quadrature = quad.evaluate(alpha, harmonic)?;
    let series = if compare {
        Some(SeriesLaplace::default().evaluate(alpha, harmonic)?)
    } else {
        None
    };
    let out = LaplaceOutput {
        alpha,
        harmonic,
        quadrature,
        series,
        relative_difference: series.map(|s| (s - quadrature).abs() / quadrature.abs()),
    };

    if json {
        return print_json(&out);
    }
    println!("b(3/2,{harmonic})({alpha}) / (3 alpha) = {quadrature:.12} (quadrature, {samples} samples)");
    if let (Some(s), Some(rel)) = (out.series, out.relative_difference) {
        println!("series ({DEFAULT_TERMS} terms): {s:.12}");
        println!("relative difference: {:.4}%", rel * 100.0);
    }
    Ok(())
}

fn run_sweep(
    from: f64,
    to: f64,
    steps: usize,
    harmonic: i32,
    samples: usize,
    json: bool,
) -> Result<()> {
    let quad = QuadratureLaplace::new(QuadratureConfig::new(samples))?;
    let alphas = alpha_grid(from, to, steps)?;
    let points = sweep(&quad, &alphas, harmonic)?;

    if json {
        return print_json(&points);
    }
    println!("{:>10}  {:>18}", "alpha", format!("b(3/2,{harmonic})/3a"));
    for p in &points {
        println!("{:>10.6}  {:>18.12}", p.alpha, p.value);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Frequencies {
            system,
            overrides,
            samples,
            tolerance,
            strategy,
            series_terms,
            json,
        } => run_frequencies(
            system,
            &overrides,
            samples,
            tolerance,
            strategy,
            series_terms,
            json,
        ),
        Commands::Laplace {
            alpha,
            harmonic,
            samples,
            compare,
            json,
        } => run_laplace(alpha, harmonic, samples, compare, json),
        Commands::Sweep {
            from,
            to,
            steps,
            harmonic,
            samples,
            json,
        } => run_sweep(from, to, steps, harmonic, samples, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn frequencies_defaults() {
        let cli = Cli::try_parse_from(["secular", "frequencies"]).unwrap();
        match cli.command {
            Commands::Frequencies {
                system,
                samples,
                tolerance,
                strategy,
                json,
                ..
            } => {
                assert!(system.is_none());
                assert_eq!(samples, 10_000);
                assert_eq!(tolerance, 1e-10);
                assert_eq!(strategy, Strategy::Quadrature);
                assert!(!json);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn frequencies_overrides_parse() {
        let cli = Cli::try_parse_from([
            "secular",
            "-vv",
            "frequencies",
            "--outer-a",
            "10.0",
            "--strategy",
            "series",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Frequencies {
                overrides,
                strategy,
                ..
            } => {
                assert_eq!(overrides.outer_a, Some(10.0));
                assert_eq!(overrides.inner_a, None);
                assert_eq!(strategy, Strategy::Series);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn negative_harmonic_reaches_library() {
        let cli =
            Cli::try_parse_from(["secular", "laplace", "--alpha", "0.5", "--harmonic", "-1"])
                .unwrap();
        match cli.command {
            Commands::Laplace {
                alpha, harmonic, ..
            } => {
                assert_eq!(alpha, 0.5);
                assert_eq!(harmonic, -1);
                assert!(run_laplace(alpha, harmonic, 100, false, true).is_err());
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn evaluator_selection() {
        assert_eq!(
            build_evaluator(Strategy::Quadrature, 100, 3).unwrap().name(),
            "quadrature"
        );
        assert_eq!(
            build_evaluator(Strategy::Series, 100, 3).unwrap().name(),
            "series"
        );
        assert!(build_evaluator(Strategy::Quadrature, 1, 3).is_err());
        assert!(build_evaluator(Strategy::Series, 100, 0).is_err());
    }

    #[test]
    fn frequencies_rejects_crossed_orbits() {
        let overrides = SystemOverrides {
            inner_a: Some(12.0),
            ..Default::default()
        };
        let err = run_frequencies(
            None,
            &overrides,
            1_000,
            1e-10,
            Strategy::Quadrature,
            3,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid domain"), "{err}");
    }
}
