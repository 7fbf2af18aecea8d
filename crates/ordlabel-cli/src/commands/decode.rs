use ordlabel::{LabelEncoderOptions, decoders::DecodeStrategy};

use crate::{
    column_io::{parse_codes, read_lines, write_column},
    encoder_args::EncoderFileArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Decode strategy selector.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Direct index lookup.
    Positional,

    /// Descending-order text substitution.
    Substitution,
}

impl From<StrategyArg> for DecodeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Positional => DecodeStrategy::Positional,
            StrategyArg::Substitution => DecodeStrategy::Substitution,
        }
    }
}

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// The decode strategy.
    #[arg(long, default_value = "positional")]
    strategy: StrategyArg,

    #[command(flatten)]
    encoder: EncoderFileArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let options = LabelEncoderOptions::default().with_decode(self.strategy.into());
        let encoder = self.encoder.load(options)?;

        let mut reader = self.input.open_reader()?;
        let codes = parse_codes(&read_lines(&mut reader)?)?;

        let labels = encoder.inverse_transform(&codes)?;

        let mut writer = self.output.open_writer()?;
        write_column(&mut writer, &labels)?;

        Ok(())
    }
}
