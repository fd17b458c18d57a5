//! Fixed-width field layouts and the generic pack/unpack engine.
//!
//! A schema is a declarative table of named fields in wire order; the engine
//! walks the table, so adding or reordering fields never involves manual
//! offset arithmetic. Wire format per field kind:
//!
//! | kind | bytes | encoding |
//! |------|-------|----------|
//! | `U8` | 1 | raw |
//! | `U16` | 2 | big-endian |
//! | `U24` | 3 | low 16 bits big-endian, then the high byte |

use crate::error::CodecError;

/// Width of a single packed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    U8,
    U16,
    U24,
}

impl FieldKind {
    /// Number of bytes the field occupies on the wire.
    pub(crate) const fn width(self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U24 => 3,
        }
    }

    /// Largest value the field can carry.
    pub(crate) const fn max(self) -> u32 {
        match self {
            FieldKind::U8 => 0xff,
            FieldKind::U16 => 0xffff,
            FieldKind::U24 => 0xff_ffff,
        }
    }
}

/// One named field of a schema, in wire order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Total wire size of a schema in bytes.
pub(crate) const fn schema_size(schema: &[FieldSpec]) -> usize {
    let mut size = 0;
    let mut index = 0;
    while index < schema.len() {
        size += schema[index].kind.width();
        index += 1;
    }
    size
}

/// Packs `values` (one per schema field, in order) into the wire layout.
///
/// # Errors
///
/// Returns [`CodecError::FieldOutOfRange`] when a value exceeds its field's
/// maximum; nothing is ever silently truncated.
pub(crate) fn pack(
    schema: &[FieldSpec],
    values: &[u32],
) -> Result<Vec<u8>, CodecError> {
    debug_assert_eq!(schema.len(), values.len());

    let mut bytes = Vec::with_capacity(schema_size(schema));
    for (spec, &value) in schema.iter().zip(values) {
        if value > spec.kind.max() {
            return Err(CodecError::FieldOutOfRange {
                field: spec.name,
                value: i64::from(value),
                max: spec.kind.max(),
            });
        }
        match spec.kind {
            FieldKind::U8 => bytes.push(value as u8),
            FieldKind::U16 => bytes.extend_from_slice(&(value as u16).to_be_bytes()),
            FieldKind::U24 => {
                bytes.extend_from_slice(&((value & 0xffff) as u16).to_be_bytes());
                bytes.push((value >> 16) as u8);
            }
        }
    }
    Ok(bytes)
}

/// Unpacks wire bytes back into one value per schema field.
///
/// # Errors
///
/// Returns [`CodecError::UnexpectedLength`] unless the byte count matches
/// the schema size exactly.
pub(crate) fn unpack(
    schema: &[FieldSpec],
    bytes: &[u8],
) -> Result<Vec<u32>, CodecError> {
    let expected = schema_size(schema);
    if bytes.len() != expected {
        return Err(CodecError::UnexpectedLength {
            expected,
            actual: bytes.len(),
        });
    }

    let mut values = Vec::with_capacity(schema.len());
    let mut offset = 0;
    for spec in schema {
        let value = match spec.kind {
            FieldKind::U8 => u32::from(bytes[offset]),
            FieldKind::U16 => {
                u32::from(u16::from_be_bytes([bytes[offset], bytes[offset + 1]]))
            }
            FieldKind::U24 => {
                let low = u32::from(u16::from_be_bytes([bytes[offset], bytes[offset + 1]]));
                let high = u32::from(bytes[offset + 2]);
                (high << 16) | low
            }
        };
        values.push(value);
        offset += spec.kind.width();
    }
    Ok(values)
}
