use std::io::{BufRead, Write};

use ordlabel::{LabelColumn, LabelDType, column::cast_back};

/// Label dtype selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DTypeArg {
    /// Free text.
    Str,

    /// Categorical text.
    Category,

    /// Signed integers.
    Int,

    /// Unsigned integers.
    Uint,

    /// Floats.
    Float,

    /// Booleans ("true" / "false").
    Bool,
}

impl From<DTypeArg> for LabelDType {
    fn from(arg: DTypeArg) -> Self {
        match arg {
            DTypeArg::Str => LabelDType::Str,
            DTypeArg::Category => LabelDType::Categorical,
            DTypeArg::Int => LabelDType::Int64,
            DTypeArg::Uint => LabelDType::UInt64,
            DTypeArg::Float => LabelDType::Float64,
            DTypeArg::Bool => LabelDType::Bool,
        }
    }
}

/// Read all lines, without their line endings.
pub fn read_lines(reader: &mut dyn BufRead) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Parse one label per line as a column of `dtype`.
pub fn parse_column(
    lines: Vec<String>,
    dtype: LabelDType,
) -> Result<LabelColumn, Box<dyn std::error::Error>> {
    Ok(cast_back(lines, dtype)?)
}

/// Parse one code per line.
pub fn parse_codes(lines: &[String]) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            line.trim()
                .parse::<i64>()
                .map_err(|e| format!("line {}: {line:?}: {e}", idx + 1).into())
        })
        .collect()
}

/// Write one code per line.
pub fn write_codes(
    writer: &mut dyn Write,
    codes: &[i64],
) -> std::io::Result<()> {
    for code in codes {
        writeln!(writer, "{code}")?;
    }
    writer.flush()
}

fn write_values<V: std::fmt::Display>(
    writer: &mut dyn Write,
    values: &[V],
) -> std::io::Result<()> {
    for value in values {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

/// Write one label per line.
pub fn write_column(
    writer: &mut dyn Write,
    column: &LabelColumn,
) -> std::io::Result<()> {
    match column {
        LabelColumn::Str(v) | LabelColumn::Categorical(v) => write_values(writer, v)?,
        LabelColumn::Int(v) => write_values(writer, v)?,
        LabelColumn::UInt(v) => write_values(writer, v)?,
        LabelColumn::Float(v) => write_values(writer, v)?,
        LabelColumn::Bool(v) => write_values(writer, v)?,
    }
    writer.flush()
}
