//! # JSON Encoder IO

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::encoders::{FittedLabels, LabelEncoder, LabelEncoderOptions};
use crate::errors::LCResult;
use crate::types::CodeType;

/// Write [`FittedLabels`] as JSON to a [`Write`] writer.
pub fn write_fitted_labels<W: Write>(
    fitted: &FittedLabels,
    writer: &mut W,
) -> LCResult<()> {
    serde_json::to_writer(&mut *writer, fitted)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Read [`FittedLabels`] as JSON from a [`Read`] reader.
pub fn read_fitted_labels<R: Read>(reader: R) -> LCResult<FittedLabels> {
    Ok(serde_json::from_reader(reader)?)
}

/// Save a fitted [`LabelEncoder`] to a JSON file.
///
/// # Arguments
/// * `encoder` - the encoder; must be fit.
/// * `path` - the path to save the encoder to.
pub fn save_label_encoder_path<C, P>(
    encoder: &LabelEncoder<C>,
    path: P,
) -> LCResult<()>
where
    C: CodeType,
    P: AsRef<Path>,
{
    let fitted = encoder.fitted()?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    write_fitted_labels(fitted, &mut writer)?;

    log::info!(
        "saved {} classes to {}",
        fitted.vocab().len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Load a fitted [`LabelEncoder`] from a JSON file.
///
/// # Arguments
/// * `path` - the path to the encoder file.
/// * `options` - the encoder options; the order is taken from the file.
pub fn load_label_encoder_path<C, P>(
    path: P,
    options: LabelEncoderOptions,
) -> LCResult<LabelEncoder<C>>
where
    C: CodeType,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    let fitted = read_fitted_labels(BufReader::new(file))?;

    log::info!(
        "loaded {} classes from {}",
        fitted.vocab().len(),
        path.as_ref().display()
    );

    LabelEncoder::from_fitted(fitted, options)
}
