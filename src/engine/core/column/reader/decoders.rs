use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decimal::DecimalDecoder;
use crate::engine::core::column::reader::dictionary::EnumDecoder;
use crate::engine::core::column::reader::fixed::{
    BoolDecoder, FloatDecoder, SignedIntDecoder, UnsignedIntDecoder,
};
use crate::engine::core::column::reader::temporal::{
    DateDecoder, IntervalDecoder, TimeDecoder, TimestampDecoder,
};
use crate::engine::core::column::reader::varlen::{BitStringDecoder, VarBytesDecoder};
use crate::engine::core::column::reader::wide::{HugeIntDecoder, UuidDecoder};
use crate::engine::errors::MarshalError;
use crate::engine::types::PhysicalFamily;
use crate::engine::value::DynamicValue;
use crate::shared::config::{CONFIG, MarshalConfig};

/// Knobs that change how bytes are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on invalid UTF-8 in VARCHAR instead of substituting U+FFFD.
    pub strict_utf8: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { strict_utf8: true }
    }
}

impl DecodeOptions {
    pub fn from_settings(marshal: &MarshalConfig) -> Self {
        Self {
            strict_utf8: marshal.strict_utf8,
        }
    }

    /// Reads the global configuration, loading it on first use.
    pub fn from_app_config() -> Self {
        Self::from_settings(&CONFIG.marshal)
    }
}

/// Turns the bytes of one non-null row into a value.
///
/// Callers must have checked the validity bitmap and row bounds already.
pub trait PhysicalDecoder: Sync {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError>;
}

static BOOL_DECODER: BoolDecoder = BoolDecoder;
static SIGNED_INT_DECODER: SignedIntDecoder = SignedIntDecoder;
static UNSIGNED_INT_DECODER: UnsignedIntDecoder = UnsignedIntDecoder;
static FLOAT_DECODER: FloatDecoder = FloatDecoder;
static HUGEINT_DECODER: HugeIntDecoder = HugeIntDecoder;
static DECIMAL_DECODER: DecimalDecoder = DecimalDecoder;
static DATE_DECODER: DateDecoder = DateDecoder;
static TIME_DECODER: TimeDecoder = TimeDecoder;
static TIMESTAMP_DECODER: TimestampDecoder = TimestampDecoder;
static INTERVAL_DECODER: IntervalDecoder = IntervalDecoder;
static UUID_DECODER: UuidDecoder = UuidDecoder;
static VARBYTES_DECODER: VarBytesDecoder = VarBytesDecoder;
static ENUM_DECODER: EnumDecoder = EnumDecoder;
static BITSTRING_DECODER: BitStringDecoder = BitStringDecoder;

pub fn decoder_for(family: PhysicalFamily) -> &'static dyn PhysicalDecoder {
    match family {
        PhysicalFamily::Bool => &BOOL_DECODER,
        PhysicalFamily::SignedInt(_) => &SIGNED_INT_DECODER,
        PhysicalFamily::UnsignedInt(_) => &UNSIGNED_INT_DECODER,
        PhysicalFamily::Float32 | PhysicalFamily::Float64 => &FLOAT_DECODER,
        PhysicalFamily::WideInt => &HUGEINT_DECODER,
        PhysicalFamily::Decimal(_) => &DECIMAL_DECODER,
        PhysicalFamily::Date => &DATE_DECODER,
        PhysicalFamily::Time => &TIME_DECODER,
        PhysicalFamily::Timestamp => &TIMESTAMP_DECODER,
        PhysicalFamily::Interval => &INTERVAL_DECODER,
        PhysicalFamily::Uuid => &UUID_DECODER,
        PhysicalFamily::VarBytes => &VARBYTES_DECODER,
        PhysicalFamily::Dictionary(_) => &ENUM_DECODER,
        PhysicalFamily::BitString => &BITSTRING_DECODER,
    }
}
