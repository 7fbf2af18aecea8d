mod classes;
mod decode;
mod encode;
mod fit;

use log::LevelFilter;

use crate::logging::LogArgs;

/// Subcommands for ordlabel-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fit an encoder to one label per line; write the codes.
    Fit(fit::FitArgs),

    /// Encode one label per line with a fitted encoder.
    Encode(encode::EncodeArgs),

    /// Decode one code per line with a fitted encoder.
    Decode(decode::DecodeArgs),

    /// List the classes of a fitted encoder.
    Classes(classes::ClassesArgs),
}

impl Commands {
    /// The logging args of the subcommand, and its default level.
    fn logging(&self) -> (&LogArgs, LevelFilter) {
        match self {
            Commands::Fit(cmd) => (&cmd.logging, LevelFilter::Info),
            Commands::Encode(cmd) => (&cmd.logging, LevelFilter::Warn),
            Commands::Decode(cmd) => (&cmd.logging, LevelFilter::Warn),
            Commands::Classes(cmd) => (&cmd.logging, LevelFilter::Warn),
        }
    }

    /// Install logging, then run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let (logging, default) = self.logging();
        logging.setup_logging(default)?;

        self.execute()
    }

    /// Run the subcommand.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Fit(cmd) => cmd.execute(),
            Commands::Encode(cmd) => cmd.execute(),
            Commands::Decode(cmd) => cmd.execute(),
            Commands::Classes(cmd) => cmd.execute(),
        }
    }
}
