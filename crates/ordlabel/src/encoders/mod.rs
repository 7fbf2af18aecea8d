//! # Label Encoders
//!
//! [`LabelEncoder`] is the user-facing encoder; it owns the
//! [`FittedLabels`] produced by `fit`, and is configured by
//! [`LabelEncoderOptions`].

pub mod encoder_options;
pub mod fitted_labels;
pub mod label_encoder;

pub use encoder_options::LabelEncoderOptions;
pub use fitted_labels::FittedLabels;
pub use label_encoder::LabelEncoder;
