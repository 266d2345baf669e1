use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use schedsim::sim::workload;
use schedsim::{report, run_all, summarize, SimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Run every policy for comparison
    All,
    Fcfs,
    SjfNp,
    SjfP,
    PriorityNp,
    PriorityP,
    Rr,
    Lottery,
    Fair,
}

impl PolicyArg {
    fn matches(self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Fcfs => name == "FCFS",
            Self::SjfNp => name == "SJF (non-preemptive)",
            Self::SjfP => name == "SJF (preemptive)",
            Self::PriorityNp => name == "Priority (non-preemptive)",
            Self::PriorityP => name == "Priority (preemptive)",
            Self::Rr => name == "Round Robin",
            Self::Lottery => name == "Lottery",
            Self::Fair => name == "Fair Share",
        }
    }
}

impl std::fmt::Display for PolicyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Fcfs => "fcfs",
            Self::SjfNp => "sjf-np",
            Self::SjfP => "sjf-p",
            Self::PriorityNp => "priority-np",
            Self::PriorityP => "priority-p",
            Self::Rr => "rr",
            Self::Lottery => "lottery",
            Self::Fair => "fair",
        };
        write!(f, "{s}")
    }
}

/// Tick-stepped simulation of classic uniprocessor scheduling policies.
#[derive(Parser, Debug)]
#[command(name = "schedsim")]
#[command(about = "Compare CPU scheduling policies on a synthetic workload", long_about = None)]
struct Args {
    /// Number of synthetic processes to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    processes: usize,

    /// Seed for workload generation and lottery draws; random if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Policy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,
}

fn run(args: &Args) -> Result<(), SimError> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let template = workload::random(args.processes, &mut rng)?;

    println!("================  CPU Scheduling Simulator  ================");
    println!("(seed {seed})");
    println!();
    print!("{}", report::render_workload(&template));

    if template.is_empty() {
        println!("\n{}", SimError::EmptyWorkload);
        return Ok(());
    }

    for run in run_all(&template, seed)? {
        if !args.policy.matches(run.name) {
            continue;
        }
        let summary = summarize(&run.procs)?;
        println!();
        print!("{}", report::render_table(run.name, &summary));
        print!("{}", report::render_gantt(run.name, &run.timeline));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
