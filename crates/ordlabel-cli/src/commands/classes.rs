use std::io::Write;

use ordlabel::LabelEncoderOptions;

use crate::{encoder_args::EncoderFileArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the classes command.
#[derive(clap::Args, Debug)]
pub struct ClassesArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    encoder: EncoderFileArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ClassesArgs {
    /// Run the classes command.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = self.encoder.load(LabelEncoderOptions::default())?;
        let fitted = encoder.fitted()?;
        log::info!("{} classes of dtype {}", fitted.vocab().len(), fitted.dtype());

        let mut writer = self.output.open_writer()?;
        for (code, key) in fitted.vocab().iter() {
            writeln!(writer, "{code}\t{key}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
