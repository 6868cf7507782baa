use super::error::PayloadError;

pub struct PayloadReader<'a> {
    payload: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), PayloadError> {
        if self.payload.len() < needed {
            return Err(PayloadError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, PayloadError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(PayloadError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, PayloadError> {
        Ok(self.read_u8(offset)? as i8)
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, PayloadError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(PayloadError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i16_be(&self, range: std::ops::Range<usize>) -> Result<i16, PayloadError> {
        Ok(self.read_u16_be(range)? as i16)
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], PayloadError> {
        self.payload
            .get(range.clone())
            .ok_or(PayloadError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::PayloadReader;
    use crate::payload::error::PayloadError;

    #[test]
    fn read_i16_be_is_signed() {
        let reader = PayloadReader::new(&[0xF6, 0x3C]);
        assert_eq!(reader.read_i16_be(0..2).unwrap(), -2500);
        assert_eq!(reader.read_u16_be(0..2).unwrap(), 63036);
    }

    #[test]
    fn read_i8_is_signed() {
        let reader = PayloadReader::new(&[0xFF]);
        assert_eq!(reader.read_i8(0).unwrap(), -1);
    }

    #[test]
    fn read_past_end_reports_too_short() {
        let reader = PayloadReader::new(&[0x01, 0x02]);
        let err = reader.read_u16_be(1..3).unwrap_err();
        assert!(matches!(
            err,
            PayloadError::TooShort {
                needed: 3,
                actual: 2
            }
        ));
    }
}
