//! # Label Encoder Options

use crate::decoders::DecodeStrategy;
use crate::vocab::VocabOrder;

/// Options for configuring a [`crate::encoders::LabelEncoder`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LabelEncoderOptions {
    /// The code ordering used by `fit`.
    pub order: VocabOrder,

    /// The decoder used by `inverse_transform`.
    pub decode: DecodeStrategy,
}

impl LabelEncoderOptions {
    /// Gets the configured vocabulary order.
    pub fn order(&self) -> VocabOrder {
        self.order
    }

    /// Sets the configured vocabulary order.
    pub fn set_order(
        &mut self,
        order: VocabOrder,
    ) {
        self.order = order;
    }

    /// Sets the configured vocabulary order.
    pub fn with_order(
        mut self,
        order: VocabOrder,
    ) -> Self {
        self.set_order(order);
        self
    }

    /// Gets the configured decode strategy.
    pub fn decode(&self) -> DecodeStrategy {
        self.decode
    }

    /// Sets the configured decode strategy.
    pub fn set_decode(
        &mut self,
        decode: DecodeStrategy,
    ) {
        self.decode = decode;
    }

    /// Sets the configured decode strategy.
    pub fn with_decode(
        mut self,
        decode: DecodeStrategy,
    ) -> Self {
        self.set_decode(decode);
        self
    }
}
