use log::LevelFilter;
use stderrlog::Timestamp;

/// Logging setup arg group.
///
/// Warnings from the encoder (such as the substitution digit hazard)
/// are shown unless `--quiet` is given.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level above the command default (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level: `default`, raised one step per `-v`.
    pub fn level(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        LevelFilter::iter()
            .skip_while(|&level| level < default)
            .nth(self.verbose as usize)
            .unwrap_or(LevelFilter::Trace)
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level(default) {
            LevelFilter::Off => stderrlog::LogLevelNum::Off,
            LevelFilter::Error => stderrlog::LogLevelNum::Error,
            LevelFilter::Warn => stderrlog::LogLevelNum::Warn,
            LevelFilter::Info => stderrlog::LogLevelNum::Info,
            LevelFilter::Debug => stderrlog::LogLevelNum::Debug,
            LevelFilter::Trace => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
