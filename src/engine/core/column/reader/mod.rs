pub mod decimal;
pub mod decoders;
pub mod dictionary;
pub mod fixed;
pub mod le_reader;
pub mod temporal;
pub mod validity;
pub mod varlen;
pub mod wide;

pub use decoders::{DecodeOptions, PhysicalDecoder, decoder_for};
pub use validity::ValidityBitmap;
