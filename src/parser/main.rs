use crate::error::Result;
use crate::parser::header::{parse_meta_header, validate_magic};
use crate::parser::record::RecordDecoder;
use crate::types::RkdSession;
use std::path::Path;

/// Parse an RKD file from disk.
pub fn parse_rkd_file(path: &Path) -> Result<RkdSession> {
    let data = std::fs::read(path)?;
    parse_rkd_bytes(&data, path)
}

/// Parse RKD data from memory.
///
/// `path` is only recorded in the session for reporting; no I/O happens.
/// Decoding is deterministic: parsing the same bytes twice yields the
/// same session.
pub fn parse_rkd_bytes(data: &[u8], path: &Path) -> Result<RkdSession> {
    validate_magic(data)?;
    let meta = parse_meta_header(data)?;

    let mut session = RkdSession::new(path.to_path_buf(), data.len(), meta);
    let mut decoder = RecordDecoder::new();
    decoder.decode_records(data, &mut session);
    session.imu_frames = decoder.into_imu_frames();
    Ok(session)
}
