use clap::{App, Arg, ArgMatches, SubCommand};

/// Trait to add new arguments to the current app
pub trait ArgAugmenter {
    /// Type of struct to output from this parser
    type Output;

    /// Specifies arguments to add
    fn add_args<'a, 'b>(&self, app: App<'a, 'b>) -> App<'a, 'b>;

    /// Parses the arguments
    fn load_from_args<'a>(&self, args: &ArgMatches<'a>) -> Self::Output;
}

/// Enum defining the selection policies
pub enum Policy {
    /// Argmin over candidate losses; steps by the winning seed
    Best,

    /// Reward-weighted combination of every candidate
    Weighted {
        /// Scale applied to each candidate's improvement over the baseline
        scale: f32,
    },
}

/// Engine hyperparameters shared by every run
pub struct RunSettings {
    /// Standard deviation of the perturbation noise
    pub stdev: f64,

    /// Number of candidate seeds scored per generation
    pub candidates: usize,

    /// Number of generations to run before exiting
    pub iterations: usize,

    /// Number of iterations between reporting metrics
    pub report_iter: usize,

    /// Number of examples in the training batch
    pub batch: usize,

    /// Seed for synthetic data generation
    pub data_seed: u64,
}

/// Struct defining the engine arguments using ArgAugmenter
pub struct EngineArgs;

impl ArgAugmenter for EngineArgs {
    type Output = RunSettings;

    /// Specifies arguments to add for the engine
    fn add_args<'a, 'b>(&self, app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(Arg::with_name("stdev")
           .short("s")
           .long("stdev")
           .takes_value(true)
           .help("Standard deviation of the perturbation noise"))
      .arg(Arg::with_name("candidates")
           .short("n")
           .long("candidates")
           .takes_value(true)
           .help("Number of candidate seeds scored per generation"))
      .arg(Arg::with_name("iters")
           .short("i")
           .long("iters")
           .takes_value(true)
           .help("Number of generations to run before exiting"))
      .arg(Arg::with_name("report_iters")
           .short("r")
           .long("report")
           .takes_value(true)
           .help("How often to report progress."))
      .arg(Arg::with_name("batch")
           .short("b")
           .long("batch")
           .takes_value(true)
           .help("Number of examples in the training batch"))
      .arg(Arg::with_name("data-seed")
           .long("data-seed")
           .takes_value(true)
           .help("Seed for synthetic data generation"))
    }

    /// Parses the arguments for the engine
    fn load_from_args<'a>(&self, args: &ArgMatches<'a>) -> RunSettings {
        RunSettings {
            stdev: value_t!(args, "stdev", f64).unwrap_or(0.003),
            candidates: value_t!(args, "candidates", usize).unwrap_or(50),
            iterations: value_t!(args, "iters", usize).unwrap_or(1000),
            report_iter: value_t!(args, "report_iters", usize).unwrap_or(10),
            batch: value_t!(args, "batch", usize).unwrap_or(300),
            data_seed: value_t!(args, "data-seed", u64).unwrap_or(42),
        }
    }
}

/// Struct defining the policy subcommands using ArgAugmenter
pub struct PolicyArgs;

impl ArgAugmenter for PolicyArgs {
    type Output = Policy;

    /// Specifies the selection policy subcommands
    fn add_args<'a, 'b>(&self, app: App<'a, 'b>) -> App<'a, 'b> {
        app.subcommand(SubCommand::with_name("best")
          .about("Steps by the best scoring candidate seed"))

      .subcommand(SubCommand::with_name("weighted")
          .about("Steps by a reward-weighted blend of every candidate")
          .arg(Arg::with_name("scale")
               .long("scale")
               .takes_value(true)
               .help("Scale applied to each candidate's improvement over the baseline")))
    }

    /// Parses the arguments for the selection policy
    fn load_from_args<'a>(&self, args: &ArgMatches<'a>) -> Policy {
        if let Some(subargs) = args.subcommand_matches("weighted") {
            let scale = value_t!(subargs, "scale", f32).unwrap_or(100.0);
            Policy::Weighted { scale: scale }
        } else {
            Policy::Best
        }
    }
}
