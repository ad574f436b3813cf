mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use lmax_solver::adapter::EngineAdapter;
use lmax_solver::adapter::SolveOutcome;
use lmax_solver::adapter::SolverAdapter;
use lmax_solver::core::convert_case::Case;
use lmax_solver::core::statistics::configure_statistic_logging;
use lmax_solver::instance::InstanceData;
use lmax_solver::instance::InstanceFormat;
use lmax_solver::model::ModelBuilder;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::LmaxResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enables logging of the model building steps and the search.
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Logs the solver statistics after every solve.
    #[arg(short = 's', long = "log-statistics", global = true)]
    log_statistics: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solves an instance given in the plain format.
    Solve(SolveArgs),
    /// Generates a random instance.
    Generate(GenerateArgs),
    /// Prints the jobs of an instance given in the plain format.
    Print {
        /// The instance to print.
        instance_path: PathBuf,
    },
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// The instance to solve. The first line holds the number of jobs n, followed by n lines
    /// `<release date> <processing time> <due date>`.
    instance_path: PathBuf,

    /// Minimises the maximum lateness instead of stopping at the first schedule.
    #[arg(long = "optimise")]
    optimise: bool,

    /// The number of milliseconds the solver is given to solve the instance.
    #[arg(long = "time-limit")]
    time_limit: Option<u64>,

    /// The number of decisions the solver may take before giving up.
    #[arg(long = "decision-limit")]
    decision_limit: Option<u64>,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// The number of jobs.
    #[arg(short = 'n')]
    num_jobs: usize,

    /// Scales the release dates, which are drawn from [0, ceil(k * n)], and the spread of the due
    /// dates.
    #[arg(short = 'k')]
    k: f64,

    /// The seed of the random generator.
    #[arg(long = "seed", default_value_t = 42)]
    seed: u64,

    /// Where to write the instance. When omitted, the instance is written to stdout.
    #[arg(long = "output")]
    output: Option<PathBuf>,

    /// The format of the written instance.
    #[arg(long = "format", value_enum, default_value_t)]
    format: InstanceFormat,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%%lmax-stat:", None, Some(Case::Snake), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
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

fn run() -> LmaxResult<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.log_statistics);

    if lmax_solver::core::asserts::LMAX_ASSERT_LEVEL_DEFINITION
        >= lmax_solver::core::asserts::LMAX_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, every solution is checked against the posted constraints.",
            lmax_solver::core::asserts::LMAX_ASSERT_LEVEL_DEFINITION
        );
    }

    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Generate(args) => generate(args),
        Command::Print { instance_path } => {
            let instance = InstanceData::read_from_path(&instance_path)?;
            println!("{instance}");
            Ok(())
        }
    }
}

fn solve(args: SolveArgs) -> LmaxResult<()> {
    let instance = InstanceData::read_from_path(&args.instance_path)?;
    info!(
        "Read {} jobs from {}",
        instance.n(),
        args.instance_path.display()
    );

    let mut adapter = EngineAdapter::new()
        .with_time_limit(args.time_limit.map(Duration::from_millis))
        .with_decision_limit(args.decision_limit);
    let model = ModelBuilder::new(&instance).build(&mut adapter)?;

    let outcome = if args.optimise {
        adapter.solve_minimize(model.lmax)
    } else {
        adapter.solve_satisfy()
    };

    match model.schedule(&outcome) {
        Some(schedule) => {
            println!("{schedule}");
            if matches!(outcome, SolveOutcome::Optimal(_)) {
                println!("optimal");
            }
        }
        None if outcome == SolveOutcome::Infeasible => println!("no solution found"),
        None => println!("search terminated without a conclusion"),
    }

    Ok(())
}

fn generate(args: GenerateArgs) -> LmaxResult<()> {
    let instance = InstanceData::generate_seeded(args.num_jobs, args.k, args.seed)?;
    info!(
        "Generated {} jobs with P = {} and R = {}",
        instance.n(),
        instance.sum_p(),
        instance.max_r()
    );

    match args.output {
        Some(path) => instance.write_to_path(path, args.format)?,
        None => instance.write(&mut std::io::stdout().lock(), args.format)?,
    }

    Ok(())
}
