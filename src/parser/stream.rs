use crate::error::{Result, RkdError};

/// Bounds-checked little-endian reader over an immutable byte buffer.
pub struct RkdDataStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RkdDataStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Take the next `len` bytes, or fail with `Truncated` if fewer remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(RkdError::Truncated {
                expected: self.pos + len,
                available: self.data.len(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_primitives() {
        let data = [0x01, 0x00, 0xff, 0xff, 0x78, 0x56, 0x34, 0x12];
        let mut s = RkdDataStream::new(&data);
        assert_eq!(s.read_u16().unwrap(), 1);
        assert_eq!(s.read_i16().unwrap(), -1);
        assert_eq!(s.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let mut s = RkdDataStream::new(&[0x01, 0x02]);
        assert!(matches!(
            s.read_u32(),
            Err(RkdError::Truncated {
                expected: 4,
                available: 2
            })
        ));
        // Position is untouched by a failed read
        assert_eq!(s.position(), 0);
        assert_eq!(s.read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn set_position_clamps_to_buffer() {
        let mut s = RkdDataStream::new(&[0u8; 4]);
        s.set_position(100);
        assert_eq!(s.position(), 4);
        assert_eq!(s.remaining(), 0);
    }
}
