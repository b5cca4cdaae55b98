use crate::error::{Result, RkdError};
use crate::parser::stream::RkdDataStream;
use crate::rkd_format::{META_HEADER_SIZE, RKD_MAGIC};
use crate::types::MetaHeader;

/// Check the 8-byte magic signature at the start of the buffer.
pub fn validate_magic(data: &[u8]) -> Result<()> {
    if data.len() < RKD_MAGIC.len() || data[..RKD_MAGIC.len()] != RKD_MAGIC {
        return Err(RkdError::BadMagic);
    }
    Ok(())
}

/// Decode the 28-byte meta header that follows the magic.
///
/// Seven little-endian u32 words; only the car id (word 5) and the session
/// start timestamp (word 6) are meaningful, the rest are reserved.
pub fn parse_meta_header(data: &[u8]) -> Result<MetaHeader> {
    let prologue = RKD_MAGIC.len() + META_HEADER_SIZE;
    if data.len() < prologue {
        return Err(RkdError::Truncated {
            expected: prologue,
            available: data.len(),
        });
    }
    let mut stream = RkdDataStream::new(data);
    stream.set_position(RKD_MAGIC.len() + 16);
    let car_id = stream.read_u32()?;
    let timestamp = stream.read_u32()?;
    Ok(MetaHeader { car_id, timestamp })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffer_is_bad_magic() {
        assert!(matches!(validate_magic(b"short"), Err(RkdError::BadMagic)));
    }

    #[test]
    fn wrong_bytes_are_bad_magic() {
        assert!(matches!(
            validate_magic(&[0u8; 40]),
            Err(RkdError::BadMagic)
        ));
    }

    #[test]
    fn valid_magic_passes() {
        let mut data = RKD_MAGIC.to_vec();
        data.extend_from_slice(&[0u8; 30]);
        assert!(validate_magic(&data).is_ok());
    }

    #[test]
    fn meta_header_too_small_is_truncated() {
        let mut data = RKD_MAGIC.to_vec();
        data.extend_from_slice(&[0u8; 10]);
        assert!(matches!(
            parse_meta_header(&data),
            Err(RkdError::Truncated { .. })
        ));
    }

    #[test]
    fn meta_header_extracts_car_id_and_timestamp() {
        let mut data = RKD_MAGIC.to_vec();
        for word in [0x0014_8000u32, 0, 1, 0, 12345, 1_617_532_800, 0] {
            data.extend_from_slice(&word.to_le_bytes());
        }
        let meta = parse_meta_header(&data).unwrap();
        assert_eq!(meta.car_id, 12345);
        assert_eq!(meta.timestamp, 1_617_532_800);
    }
}
