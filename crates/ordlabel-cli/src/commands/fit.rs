use ordlabel::{LabelEncoder, LabelEncoderOptions, vocab::VocabOrder};

use crate::{
    column_io::{DTypeArg, parse_column, read_lines, write_codes},
    encoder_args::EncoderFileArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Vocabulary order selector.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OrderArg {
    /// Codes in first-occurrence order.
    FirstSeen,

    /// Codes in sorted key order.
    Sorted,
}

impl From<OrderArg> for VocabOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::FirstSeen => VocabOrder::FirstSeen,
            OrderArg::Sorted => VocabOrder::Sorted,
        }
    }
}

/// Args for the fit command.
#[derive(clap::Args, Debug)]
pub struct FitArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// The label dtype.
    #[arg(long, default_value = "str")]
    dtype: DTypeArg,

    /// The code order.
    #[arg(long, default_value = "first-seen")]
    order: OrderArg,

    #[command(flatten)]
    encoder: EncoderFileArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl FitArgs {
    /// Run the fit command.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let y = parse_column(read_lines(&mut reader)?, self.dtype.into())?;
        log::info!("read {} labels", y.len());

        let options = LabelEncoderOptions::default().with_order(self.order.into());
        let mut encoder: LabelEncoder<i64> = LabelEncoder::with_options(options);
        let codes = encoder.fit_transform(&y)?;

        self.encoder.save(&encoder)?;

        let mut writer = self.output.open_writer()?;
        write_codes(&mut writer, &codes)?;

        Ok(())
    }
}
