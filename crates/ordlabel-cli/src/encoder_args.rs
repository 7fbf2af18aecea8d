use std::path::PathBuf;

use ordlabel::{
    LabelEncoder,
    LabelEncoderOptions,
    io::{load_label_encoder_path, save_label_encoder_path},
};

/// Encoder file arg group.
#[derive(clap::Args, Debug)]
pub struct EncoderFileArgs {
    /// Path of the fitted encoder JSON file.
    #[arg(long)]
    pub encoder: PathBuf,
}

impl EncoderFileArgs {
    /// Load the fitted encoder.
    pub fn load(
        &self,
        options: LabelEncoderOptions,
    ) -> Result<LabelEncoder<i64>, Box<dyn std::error::Error>> {
        Ok(load_label_encoder_path(&self.encoder, options)?)
    }

    /// Save a fitted encoder.
    pub fn save(
        &self,
        encoder: &LabelEncoder<i64>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(save_label_encoder_path(encoder, &self.encoder)?)
    }
}
