mod os_signal_termination;
mod rlfap;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use log::error;
use log::info;
use log::LevelFilter;
use marconi_solver::convert_case::Case;
use marconi_solver::results::SatisfactionResult;
use marconi_solver::statistics::configure_statistic_logging;
use marconi_solver::termination::AssignmentBudget;
use marconi_solver::termination::Combinator;
use marconi_solver::termination::TimeBudget;
use marconi_solver::Solver;
use os_signal_termination::OsSignal;
use rlfap::error::RlfapError;

#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Args {
    /// The instance to solve, e.g. '2-f24'. The 'var', 'dom' and 'ctr' files belonging to the
    /// instance are located by name in the data directory.
    #[clap(verbatim_doc_comment)]
    instance: String,

    /// The directory containing the instance files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// The wall-clock time budget for the search, in seconds.
    ///
    /// When the budget runs out before the search reaches a conclusion, the result is UNKNOWN.
    #[arg(long, verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of variable assignments the search may perform.
    ///
    /// Unlike a time limit this bound is reproducible across machines.
    #[arg(long, verbatim_doc_comment)]
    assignment_budget: Option<u64>,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Logs the statistics of the run after the search finishes.
    #[arg(long)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), RlfapError> {
    let args = Args::parse();

    configure_logging(args.verbose);
    if args.log_statistics {
        configure_statistic_logging("%%", None, Some(Case::Camel), None);
    }

    let signal_termination = OsSignal::install();

    let model = rlfap::load_instance(&args.data_dir, &args.instance)?;
    info!(
        "loaded instance {} with {} variables and {} constraints",
        args.instance,
        model.num_variables(),
        model.num_constraints()
    );

    let mut solver = Solver::with_model(model);
    let mut selector = solver.default_selector();
    let mut termination = Combinator::new(
        signal_termination,
        Combinator::new(
            args.time_limit
                .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds))),
            args.assignment_budget.map(AssignmentBudget::new),
        ),
    );

    let start = Instant::now();
    let result = solver.satisfy(&mut selector, &mut termination);
    let elapsed = start.elapsed();

    match result {
        SatisfactionResult::Satisfiable(solution) => {
            println!("SATISFIABLE");
            let model = solver.model();
            for (variable, value) in solution.iter() {
                println!("{} = {}", model.label(variable), value);
            }
        }
        SatisfactionResult::Unsatisfiable => {
            println!("UNSATISFIABLE");
        }
        SatisfactionResult::Unknown => {
            println!("UNKNOWN");
        }
    }

    info!(
        "search took {:.4}s and {} assignments",
        elapsed.as_secs_f64(),
        solver.number_of_assignments()
    );
    if args.log_statistics {
        solver.log_statistics();
    }

    Ok(())
}
