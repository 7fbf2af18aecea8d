use ordlabel::LabelEncoderOptions;

use crate::{
    column_io::{parse_column, read_lines, write_codes},
    encoder_args::EncoderFileArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Use the rayon parallel encoder.
    #[arg(long)]
    parallel: bool,

    #[command(flatten)]
    encoder: EncoderFileArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = self.encoder.load(LabelEncoderOptions::default())?;
        let dtype = encoder.fitted()?.dtype();

        let mut reader = self.input.open_reader()?;
        let y = parse_column(read_lines(&mut reader)?, dtype)?;

        let codes = if self.parallel {
            encoder.par_transform(&y)?
        } else {
            encoder.transform(&y)?
        };

        let mut writer = self.output.open_writer()?;
        write_codes(&mut writer, &codes)?;

        Ok(())
    }
}
