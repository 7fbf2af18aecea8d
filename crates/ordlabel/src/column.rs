//! # Label Columns
//!
//! [`LabelColumn`] is the ordered, homogeneous container which flows in and
//! out of the encoder; [`LabelDType`] is the tag recording which element type
//! a column held before it was coerced to strings.
//!
//! The dictionary engine only ever sees strings:
//! * [`coerce`] - column to string keys.
//! * [`cast_back`] - string keys to a column of a given dtype.

use core::fmt::{Display, Formatter};
use core::str::FromStr;
use std::borrow::Cow;

use crate::errors::{LCResult, LabelError};
use crate::types::CodeType;

/// The element type of a [`LabelColumn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelDType {
    /// Free text.
    Str,

    /// Categorical text; stored as strings, tagged separately.
    Categorical,

    /// Signed 64-bit integers.
    Int64,

    /// Unsigned 64-bit integers.
    UInt64,

    /// 64-bit floats.
    Float64,

    /// Booleans.
    Bool,
}

impl LabelDType {
    /// Is this a string-like type, which passes through coercion unchanged?
    pub fn is_string_like(&self) -> bool {
        matches!(self, LabelDType::Str | LabelDType::Categorical)
    }

    /// Is this a numeric type?
    pub fn is_numeric(&self) -> bool {
        !self.is_string_like()
    }

    /// The short name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            LabelDType::Str => "str",
            LabelDType::Categorical => "category",
            LabelDType::Int64 => "int64",
            LabelDType::UInt64 => "uint64",
            LabelDType::Float64 => "float64",
            LabelDType::Bool => "bool",
        }
    }
}

impl Display for LabelDType {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, homogeneous column of labels.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelColumn {
    /// Free text labels.
    Str(Vec<String>),

    /// Categorical text labels.
    Categorical(Vec<String>),

    /// Signed integer labels.
    Int(Vec<i64>),

    /// Unsigned integer labels.
    UInt(Vec<u64>),

    /// Float labels.
    Float(Vec<f64>),

    /// Boolean labels.
    Bool(Vec<bool>),
}

impl LabelColumn {
    /// The element type of the column.
    pub fn dtype(&self) -> LabelDType {
        match self {
            LabelColumn::Str(_) => LabelDType::Str,
            LabelColumn::Categorical(_) => LabelDType::Categorical,
            LabelColumn::Int(_) => LabelDType::Int64,
            LabelColumn::UInt(_) => LabelDType::UInt64,
            LabelColumn::Float(_) => LabelDType::Float64,
            LabelColumn::Bool(_) => LabelDType::Bool,
        }
    }

    /// The number of elements in the column.
    pub fn len(&self) -> usize {
        match self {
            LabelColumn::Str(v) | LabelColumn::Categorical(v) => v.len(),
            LabelColumn::Int(v) => v.len(),
            LabelColumn::UInt(v) => v.len(),
            LabelColumn::Float(v) => v.len(),
            LabelColumn::Bool(v) => v.len(),
        }
    }

    /// Returns true if the column has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read an integer column as codes.
    ///
    /// ## Returns
    /// * [`LabelError::InvalidInput`] if this is not an integer column,
    ///   or an unsigned value exceeds `i64::MAX`.
    /// * [`LabelError::CodeOutOfRange`] if a value does not fit in `C`.
    pub fn to_codes<C: CodeType>(&self) -> LCResult<Vec<C>> {
        match self {
            LabelColumn::Int(values) => values
                .iter()
                .map(|&v| C::from_i64(v).ok_or(LabelError::CodeOutOfRange { code: v }))
                .collect(),
            LabelColumn::UInt(values) => values
                .iter()
                .map(|&v| match i64::try_from(v) {
                    Ok(code) => C::from_i64(code).ok_or(LabelError::CodeOutOfRange { code }),
                    Err(_) => Err(LabelError::InvalidInput(format!(
                        "code {v} is out of range for any vocabulary"
                    ))),
                })
                .collect(),
            _ => Err(LabelError::InvalidInput(format!(
                "input of type {} is not an integer code column",
                self.dtype()
            ))),
        }
    }
}

impl From<Vec<String>> for LabelColumn {
    fn from(values: Vec<String>) -> Self {
        LabelColumn::Str(values)
    }
}

impl From<Vec<&str>> for LabelColumn {
    fn from(values: Vec<&str>) -> Self {
        values.as_slice().into()
    }
}

impl From<&[&str]> for LabelColumn {
    fn from(values: &[&str]) -> Self {
        LabelColumn::Str(values.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<i64>> for LabelColumn {
    fn from(values: Vec<i64>) -> Self {
        LabelColumn::Int(values)
    }
}

impl From<Vec<i32>> for LabelColumn {
    fn from(values: Vec<i32>) -> Self {
        LabelColumn::Int(values.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<u64>> for LabelColumn {
    fn from(values: Vec<u64>) -> Self {
        LabelColumn::UInt(values)
    }
}

impl From<Vec<f64>> for LabelColumn {
    fn from(values: Vec<f64>) -> Self {
        LabelColumn::Float(values)
    }
}

impl From<Vec<bool>> for LabelColumn {
    fn from(values: Vec<bool>) -> Self {
        LabelColumn::Bool(values)
    }
}

fn to_strings<V: ToString>(values: &[V]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Coerce a column to its string keys.
///
/// String-like columns are borrowed unchanged;
/// every other column is cast element-wise to its string form.
pub fn coerce(column: &LabelColumn) -> Cow<'_, [String]> {
    match column {
        LabelColumn::Str(v) | LabelColumn::Categorical(v) => Cow::Borrowed(v.as_slice()),
        LabelColumn::Int(v) => Cow::Owned(to_strings(v)),
        LabelColumn::UInt(v) => Cow::Owned(to_strings(v)),
        LabelColumn::Float(v) => Cow::Owned(to_strings(v)),
        LabelColumn::Bool(v) => Cow::Owned(to_strings(v)),
    }
}

fn parse_keys<V>(
    keys: &[String],
    dtype: LabelDType,
) -> LCResult<Vec<V>>
where
    V: FromStr,
    V::Err: Display,
{
    keys.iter()
        .map(|k| {
            k.parse::<V>()
                .map_err(|e| LabelError::Parse(format!("{k:?} as {dtype}: {e}")))
        })
        .collect()
}

/// Cast string keys back into a column of `dtype`.
///
/// This is the inverse of [`coerce`]; keys produced by coercing a column
/// of `dtype` always parse.
///
/// ## Returns
/// [`LabelError::Parse`] if a key is not a valid `dtype` value.
pub fn cast_back(
    keys: Vec<String>,
    dtype: LabelDType,
) -> LCResult<LabelColumn> {
    Ok(match dtype {
        LabelDType::Str => LabelColumn::Str(keys),
        LabelDType::Categorical => LabelColumn::Categorical(keys),
        LabelDType::Int64 => LabelColumn::Int(parse_keys(&keys, dtype)?),
        LabelDType::UInt64 => LabelColumn::UInt(parse_keys(&keys, dtype)?),
        LabelDType::Float64 => LabelColumn::Float(parse_keys(&keys, dtype)?),
        LabelDType::Bool => LabelColumn::Bool(parse_keys(&keys, dtype)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_borrows_strings() {
        let column: LabelColumn = vec!["a", "b"].into();
        assert!(matches!(coerce(&column), Cow::Borrowed(_)));

        let column = LabelColumn::Categorical(vec!["x".to_string()]);
        assert!(matches!(coerce(&column), Cow::Borrowed(_)));
    }

    #[test]
    fn test_coerce_casts_numbers() {
        let column: LabelColumn = vec![10_i64, -3].into();
        assert_eq!(coerce(&column).as_ref(), &["10", "-3"]);

        let column: LabelColumn = vec![1.5_f64, 2.0].into();
        assert_eq!(coerce(&column).as_ref(), &["1.5", "2"]);

        let column: LabelColumn = vec![true, false].into();
        assert_eq!(coerce(&column).as_ref(), &["true", "false"]);
    }

    #[test]
    fn test_cast_back() {
        let column: LabelColumn = vec![7_u64, 12].into();
        let keys = coerce(&column).into_owned();
        assert_eq!(cast_back(keys, LabelDType::UInt64).unwrap(), column);

        let column: LabelColumn = vec![0.25_f64, -8.0].into();
        let keys = coerce(&column).into_owned();
        assert_eq!(cast_back(keys, LabelDType::Float64).unwrap(), column);

        assert!(matches!(
            cast_back(vec!["abc".to_string()], LabelDType::Int64),
            Err(LabelError::Parse(_))
        ));
    }

    #[test]
    fn test_to_codes() {
        let column: LabelColumn = vec![0_i64, 3, 1].into();
        assert_eq!(column.to_codes::<i32>().unwrap(), vec![0, 3, 1]);

        let column: LabelColumn = vec![i64::MAX].into();
        assert!(matches!(
            column.to_codes::<i16>(),
            Err(LabelError::CodeOutOfRange { code: i64::MAX })
        ));

        let column: LabelColumn = vec![2_u64, 70_000].into();
        assert!(matches!(
            column.to_codes::<i16>(),
            Err(LabelError::CodeOutOfRange { code: 70_000 })
        ));

        let column: LabelColumn = vec![1_u64, u64::MAX].into();
        match column.to_codes::<i64>() {
            Err(LabelError::InvalidInput(msg)) => assert!(msg.contains(&u64::MAX.to_string())),
            other => panic!("expected InvalidInput: {other:?}"),
        }

        let column: LabelColumn = vec!["0"].into();
        assert!(matches!(
            column.to_codes::<i32>(),
            Err(LabelError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_dtype_tags() {
        assert!(LabelDType::Str.is_string_like());
        assert!(LabelDType::Categorical.is_string_like());
        assert!(LabelDType::Int64.is_numeric());
        assert_eq!(LabelDType::Categorical.to_string(), "category");
        assert_eq!(LabelColumn::from(vec![true]).dtype(), LabelDType::Bool);
    }
}
