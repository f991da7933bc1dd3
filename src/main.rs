use clap::Parser;
use sextant::output;
use sextant::parser;
use sextant::solver::cramer::CramerSolver;
use sextant::solver::gauss::GaussSolver;
use sextant::solver::inverse::MatrixInverseSolver;
use sextant::solver::jacobi::JacobiSolver;
use sextant::solver::relaxation::RelaxationSolver;
use sextant::solver::seidel::GaussSeidelSolver;
use sextant::solver::{IterationConfig, Solver};
use sextant::stats::Stats;
use std::io;
use std::time::Instant;

/// Six-method linear system solver
#[derive(Parser)]
#[command(name = "sextant", version)]
struct Cli {
    /// Linear system description file
    system: String,

    /// Iteration cap for the iterative methods
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Convergence tolerance for the iterative methods
    #[arg(long)]
    epsilon: Option<f32>,

    /// Print performance stats to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut stats = if cli.stats { Some(Stats::new()) } else { None };

    let input = std::fs::read_to_string(&cli.system).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", cli.system, e);
        std::process::exit(1);
    });

    let t = Instant::now();
    let system = parser::parse(&input).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });
    if let Some(ref mut s) = stats {
        s.add_phase("parse", t.elapsed());
    }

    let mut config = IterationConfig::default();
    if let Some(max) = cli.max_iterations {
        config.max_iterations = max;
    }
    if let Some(eps) = cli.epsilon {
        config.epsilon = eps;
    }

    let solvers: Vec<(&'static str, Box<dyn Solver>)> = vec![
        (
            "Gaussian elimination",
            Box::new(GaussSolver::new(system.clone())),
        ),
        (
            "Cramer's method",
            Box::new(CramerSolver::new(system.clone())),
        ),
        (
            "Matrix inversion",
            Box::new(MatrixInverseSolver::new(system.clone())),
        ),
        (
            "Jacobi method",
            Box::new(JacobiSolver::with_config(system.clone(), config)),
        ),
        (
            "Gauss-Seidel method",
            Box::new(GaussSeidelSolver::with_config(system.clone(), config)),
        ),
        (
            "Relaxation method",
            Box::new(RelaxationSolver::with_config(system.clone(), config)),
        ),
    ];

    let mut stdout = io::stdout();
    output::write_equations(&system, &mut stdout).unwrap_or_else(|e| {
        eprintln!("Output error: {}", e);
        std::process::exit(1);
    });

    // Each method runs on its own; one failing never stops the rest.
    for (label, solver) in solvers {
        let t = Instant::now();
        let outcome = solver.solve();
        if let Some(ref mut s) = stats {
            s.add_phase(label, t.elapsed());
        }
        let solution = match &outcome {
            Ok(x) => Some(x.as_slice()),
            Err(e) => {
                tracing::warn!(method = label, error = %e, "solve failed");
                None
            }
        };
        output::write_solution(label, solution, &mut stdout).unwrap_or_else(|e| {
            eprintln!("Output error: {}", e);
            std::process::exit(1);
        });
    }

    if let Some(ref stats) = stats {
        stats.display();
    }
}
