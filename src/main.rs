use boolproof::census::{run_census, CensusConfig};
use boolproof::ir::{cnf_to_formula, parse_clauses, Formula};
use boolproof::search::{searcher_for, Algorithm, ParallelConfig, ProofSequence, SearchConfig};
use boolproof::semantics::{classify, Classification, Goal};
use boolproof::validation::verify_proof;
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;
use tracing::Level;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "boolproof")]
#[command(about = "boolproof - minimal rewrite proofs for Boolean formulas in prefix notation")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Enumerative search (exhaustive, single thread)
    Enumerative,
    /// Enumerative search split across worker threads
    Parallel,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Enumerative => Algorithm::Enumerative,
            CliAlgorithm::Parallel => Algorithm::Parallel,
        }
    }
}

/// CLI proof goal selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliGoal {
    /// Rewrite to T
    Tautology,
    /// Rewrite to F
    Contradiction,
}

impl From<CliGoal> for Goal {
    fn from(cli: CliGoal) -> Self {
        match cli {
            CliGoal::Tautology => Goal::Tautology,
            CliGoal::Contradiction => Goal::Contradiction,
        }
    }
}

/// Options shared by every command that searches for proofs
#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Longest proof to look for
    #[arg(long, short = 'm', default_value = "5")]
    max_length: usize,
    /// Search algorithm to use
    #[arg(long, value_enum, default_value = "enumerative")]
    algorithm: CliAlgorithm,
    /// Number of worker threads for parallel search
    #[arg(long, short = 'j')]
    workers: Option<usize>,
    /// Timeout in seconds for each search
    #[arg(long)]
    timeout: Option<u64>,
    /// Trailing room in the formula buffer
    #[arg(long, default_value = "7")]
    slack: usize,
    /// Exclusive upper bound on step positions (default: buffer capacity)
    #[arg(long)]
    position_limit: Option<usize>,
}

impl SearchArgs {
    fn search_config(&self, verbose: bool) -> SearchConfig {
        let mut config = SearchConfig::default()
            .with_algorithm(self.algorithm.into())
            .with_max_length(self.max_length)
            .with_slack(self.slack)
            .with_timeout_option(self.timeout.map(Duration::from_secs))
            .with_verbose(verbose);
        if let Some(limit) = self.position_limit {
            config = config.with_position_limit(limit);
        }
        config
    }

    fn parallel_config(&self) -> ParallelConfig {
        let config = ParallelConfig::default();
        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula under every assignment
    Classify {
        /// Formula in prefix notation, e.g. "+ x0 - x0"
        #[arg(allow_hyphen_values = true)]
        formula: String,
        /// Goal whose counterexample is reported
        #[arg(long, value_enum, default_value = "tautology")]
        goal: CliGoal,
    },
    /// Search for a minimal proof that a formula rewrites to a constant
    Prove {
        /// Formula in prefix notation, e.g. "+ x0 - x0"
        #[arg(allow_hyphen_values = true)]
        formula: String,
        /// Constant to rewrite the formula into
        #[arg(long, value_enum, default_value = "tautology")]
        goal: CliGoal,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Check a proof written as law@position steps
    Check {
        /// Formula in prefix notation, e.g. "+ x0 - x0"
        #[arg(allow_hyphen_values = true)]
        formula: String,
        /// Proof steps, e.g. "complement@0" or "5@1, 4@0"
        proof: String,
        /// Constant the proof must reach
        #[arg(long, value_enum, default_value = "tautology")]
        goal: CliGoal,
        /// Trailing room in the formula buffer, as used when the proof was found
        #[arg(long, default_value = "7")]
        slack: usize,
    },
    /// Prove every formula of a given size and report statistics
    Census {
        /// Symbols per formula (at least 2)
        symbols: usize,
        /// Which formulas to collect
        #[arg(long, value_enum, default_value = "tautology")]
        goal: CliGoal,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Convert 3-CNF clauses to a formula, optionally proving it unsatisfiable
    Cnf {
        /// Clauses of three signed literals, e.g. "1 -3 4; -2 3 -5"
        #[arg(allow_hyphen_values = true)]
        clauses: String,
        /// Search for a proof as well as converting
        #[arg(long)]
        prove: bool,
        /// Constant to rewrite the formula into
        #[arg(long, value_enum, default_value = "contradiction")]
        goal: CliGoal,
        #[command(flatten)]
        search: SearchArgs,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn describe(formula: &Formula) -> String {
    format!("{} = {}", formula.codes(), formula)
}

// --- Commands ---

fn run_classify(text: &str, goal: Goal) -> CliResult {
    let formula: Formula = text.parse()?;
    match classify(&formula, goal) {
        Classification::Neither(witness) => println!(
            "{} is neither a tautology nor a contradiction. Counterexample: {}",
            describe(&formula),
            witness
        ),
        class => println!("{} is a {}.", describe(&formula), class),
    }
    Ok(())
}

fn prove_formula(
    formula: &Formula,
    goal: Goal,
    config: &SearchConfig,
    parallel: &ParallelConfig,
) -> CliResult {
    match classify(formula, goal) {
        Classification::Neither(witness) => {
            println!(
                "{} is not a {}. Counterexample: {}",
                describe(formula),
                goal,
                witness
            );
            return Ok(());
        }
        class if !class.matches(goal) => {
            println!("{} is not a {}, it is a {}.", describe(formula), goal, class);
            return Ok(());
        }
        _ => {}
    }

    let mut searcher = searcher_for(config, parallel);
    let result = searcher.search(formula, goal, config);
    print!("{}", result);
    if config.verbose {
        println!();
        print!("{}", result.statistics.format_summary());
    }
    Ok(())
}

fn run_prove(text: &str, goal: Goal, search: &SearchArgs, verbose: bool) -> CliResult {
    let config = search.search_config(verbose);
    let formula = Formula::parse(text, config.slack)?;
    prove_formula(&formula, goal, &config, &search.parallel_config())
}

fn run_check(text: &str, proof: &str, goal: Goal, slack: usize) -> CliResult {
    let formula = Formula::parse(text, slack)?;
    let proof: ProofSequence = proof.parse()?;
    let trace = verify_proof(&formula, proof.steps(), goal)?;
    print!("{}", trace);
    println!(
        "Valid proof of length {} that {} is a {}.",
        trace.len(),
        formula,
        goal
    );
    Ok(())
}

fn run_census_command(symbols: usize, goal: Goal, search: &SearchArgs, verbose: bool) -> CliResult {
    let config = CensusConfig::default()
        .with_symbols(symbols)
        .with_goal(goal)
        .with_search(search.search_config(verbose))
        .with_parallel(search.parallel_config());
    let report = run_census(&config)?;
    print!("{}", report);
    Ok(())
}

fn run_cnf(text: &str, prove: bool, goal: Goal, search: &SearchArgs, verbose: bool) -> CliResult {
    let config = search.search_config(verbose);
    let clauses = parse_clauses(text)?;
    let formula = cnf_to_formula(&clauses, config.slack)?;
    println!("{}", describe(&formula));
    if prove {
        prove_formula(&formula, goal, &config, &search.parallel_config())?;
    } else {
        println!("{}", classify(&formula, goal));
    }
    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = match &args.command {
        Commands::Classify { formula, goal } => run_classify(formula, (*goal).into()),
        Commands::Prove {
            formula,
            goal,
            search,
        } => run_prove(formula, (*goal).into(), search, args.verbose),
        Commands::Check {
            formula,
            proof,
            goal,
            slack,
        } => run_check(formula, proof, (*goal).into(), *slack),
        Commands::Census {
            symbols,
            goal,
            search,
        } => run_census_command(*symbols, (*goal).into(), search, args.verbose),
        Commands::Cnf {
            clauses,
            prove,
            goal,
            search,
        } => run_cnf(clauses, *prove, (*goal).into(), search, args.verbose),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
