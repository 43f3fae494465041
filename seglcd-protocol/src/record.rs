//! DP record decoding.
//!
//! Record format:
//! - ID (1 byte): data point identifier
//! - TYPE (1 byte): DP value type
//! - LENGTH (1 byte): value length as sent by the peer
//! - VALUE (1+ bytes): value, only the first byte is read

/// Bytes preceding the value: ID, TYPE, LENGTH
pub const DP_HEADER_LEN: usize = 3;

/// Shortest record that carries a value byte
pub const DP_MIN_LEN: usize = DP_HEADER_LEN + 1;

/// Errors that can occur while decoding a DP write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DpError {
    /// Buffer ends before the value byte
    TooShort { len: usize },
    /// DP ID is not handled by this device
    UnknownId(u8),
    /// Mode DP carried an unknown mode code
    UnknownMode(u8),
    /// Display DP carried an unknown content code
    UnknownDisplay(u8),
}

/// A decoded DP record header plus its first value byte
///
/// Borrow-free copy of the four bytes the demo reads; the caller's buffer is
/// not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DpRecord {
    /// DP identifier (byte 0)
    pub id: u8,
    /// Raw type byte (byte 1), not validated
    pub dp_type: u8,
    /// Raw length byte (byte 2), not validated
    pub len: u8,
    /// First value byte (byte 3)
    pub value: u8,
}

impl DpRecord {
    /// Decode a record from a DP write buffer
    ///
    /// Only the length is checked. Bytes past the first value byte are
    /// ignored.
    pub fn parse(data: &[u8]) -> Result<Self, DpError> {
        match data {
            [id, dp_type, len, value, ..] => Ok(Self {
                id: *id,
                dp_type: *dp_type,
                len: *len,
                value: *value,
            }),
            _ => Err(DpError::TooShort { len: data.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_minimal_record() {
        let record = DpRecord::parse(&[101, 0x04, 0x01, 0x02]).unwrap();
        assert_eq!(record.id, 101);
        assert_eq!(record.dp_type, 0x04);
        assert_eq!(record.len, 1);
        assert_eq!(record.value, 2);
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let record = DpRecord::parse(&[102, 0x04, 0x01, 0x03, 0xFF, 0xEE]).unwrap();
        assert_eq!(record.id, 102);
        assert_eq!(record.value, 3);
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(DpRecord::parse(&[]), Err(DpError::TooShort { len: 0 }));
        assert_eq!(
            DpRecord::parse(&[101, 0x04, 0x01]),
            Err(DpError::TooShort { len: 3 })
        );
    }

    #[test]
    fn test_type_and_length_not_validated() {
        let record = DpRecord::parse(&[101, 0x7F, 0x00, 0x00]).unwrap();
        assert_eq!(record.dp_type, 0x7F);
        assert_eq!(record.len, 0);
    }

    proptest! {
        #[test]
        fn parse_reads_bytes_zero_and_three(data in proptest::collection::vec(any::<u8>(), 0..16)) {
            match DpRecord::parse(&data) {
                Ok(record) => {
                    prop_assert!(data.len() >= DP_MIN_LEN);
                    prop_assert_eq!(record.id, data[0]);
                    prop_assert_eq!(record.value, data[3]);
                }
                Err(err) => {
                    prop_assert!(data.len() < DP_MIN_LEN);
                    prop_assert_eq!(err, DpError::TooShort { len: data.len() });
                }
            }
        }
    }
}
