//! # `ordlabel` Ordinal Label Encoding
//!
//! Maps a column of categorical labels to dense integer codes,
//! and maps codes back to labels of the original type.
//!
//! See:
//! * [`encoders`] for the [`LabelEncoder`] (`fit`, `transform`, `fit_transform`,
//!   `inverse_transform`).
//! * [`vocab`] for the [`vocab::LabelVocab`] dictionary engine.
//! * [`decoders`] for the code-to-label decoders.
//! * [`column`] for the [`LabelColumn`] container, and string coercion.
//!
//! ## Example
//!
//! ```rust
//! use ordlabel::{LabelColumn, LabelEncoder};
//!
//! let mut encoder: LabelEncoder = LabelEncoder::new();
//!
//! let y: LabelColumn = vec![10_i64, 20, 10, 30].into();
//! let codes = encoder.fit_transform(&y).unwrap();
//! assert_eq!(codes, vec![0, 1, 0, 2]);
//!
//! // The labels come back as integers, not strings.
//! assert_eq!(encoder.inverse_transform(&codes).unwrap(), y);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "serde")]
pub mod io;

pub mod column;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use column::{LabelColumn, LabelDType};
#[doc(inline)]
pub use encoders::{LabelEncoder, LabelEncoderOptions};
#[doc(inline)]
pub use errors::{LCResult, LabelError};
