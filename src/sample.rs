//! Truncated sample-file generation
//!
//! Copies the prologue plus whole records until a GPS-fix quota is
//! reached, then appends a zeroed trailing checksum. The result decodes
//! with the normal parser because mid-stream truncation is already a
//! clean stop condition there.

use crate::error::Result;
use crate::parser::header::{parse_meta_header, validate_magic};
use crate::rkd_format::{
    META_HEADER_SIZE, RECORD_HEADER_SIZE, RKD_MAGIC, TRAILING_CRC_SIZE,
};
use crate::types::RecordType;
use std::path::Path;

/// What a sample write produced.
#[derive(Debug, Clone, Copy)]
pub struct SampleInfo {
    pub bytes_written: usize,
    pub gps_fixes: usize,
}

/// Write a truncated copy of `input` containing at most `max_gps_fixes`
/// GPS records (plus everything interleaved before them).
pub fn write_sample_rkd(input: &Path, output: &Path, max_gps_fixes: usize) -> Result<SampleInfo> {
    let data = std::fs::read(input)?;
    validate_magic(&data)?;
    parse_meta_header(&data)?;

    let prologue = RKD_MAGIC.len() + META_HEADER_SIZE;
    let end = data.len().saturating_sub(TRAILING_CRC_SIZE);

    let mut out = Vec::with_capacity(data.len());
    out.extend_from_slice(&data[..prologue]);

    let mut offset = prologue;
    let mut gps_count = 0usize;
    while offset + RECORD_HEADER_SIZE <= end {
        let type_code = u16::from_le_bytes([data[offset + 2], data[offset + 3]]);
        let payload_len = u16::from_le_bytes([data[offset + 4], data[offset + 5]]) as usize;
        let record_end = offset + RECORD_HEADER_SIZE + payload_len;
        if record_end > end {
            break;
        }

        if type_code == RecordType::Position.code() {
            gps_count += 1;
            if gps_count > max_gps_fixes {
                break;
            }
        }

        out.extend_from_slice(&data[offset..record_end]);

        if type_code == RecordType::Terminator.code() {
            break;
        }
        offset = record_end;
    }

    // Zeroed trailing checksum; the format documents it as unverified
    out.extend_from_slice(&[0, 0]);
    std::fs::write(output, &out)?;

    Ok(SampleInfo {
        bytes_written: out.len(),
        gps_fixes: gps_count.min(max_gps_fixes),
    })
}
