use super::LoadResult;

// ----------------------------------------------
// SaveBuffer
// ----------------------------------------------

// Little-endian byte buffer with a read cursor. Writes always append;
// reads consume from the cursor and fail once the data is exhausted.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct SaveBuffer {
    data: Vec<u8>,
    cursor: usize,
}

macro_rules! buffer_primitive {
    ($write_fn:ident, $read_fn:ident, $ty:ty) => {
        #[inline]
        pub fn $write_fn(&mut self, value: $ty) {
            self.data.extend_from_slice(&value.to_le_bytes());
        }

        #[inline]
        pub fn $read_fn(&mut self) -> Result<$ty, String> {
            const SIZE: usize = std::mem::size_of::<$ty>();
            let bytes = self.take(SIZE)?;
            let mut raw = [0u8; SIZE];
            raw.copy_from_slice(bytes);
            Ok(<$ty>::from_le_bytes(raw))
        }
    };
}

impl SaveBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity), cursor: 0 }
    }

    #[inline]
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, cursor: 0 }
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Unread bytes left after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    // True if at least `count` more bytes can be read.
    #[inline]
    pub fn is_valid(&self, count: usize) -> bool {
        self.remaining() >= count
    }

    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    buffer_primitive!(write_u8,  read_u8,  u8);
    buffer_primitive!(write_i8,  read_i8,  i8);
    buffer_primitive!(write_u16, read_u16, u16);
    buffer_primitive!(write_i16, read_i16, i16);
    buffer_primitive!(write_u32, read_u32, u32);
    buffer_primitive!(write_i32, read_i32, i32);

    pub fn write_i16_array<const N: usize>(&mut self, values: [i16; N]) {
        for value in values {
            self.write_i16(value);
        }
    }

    pub fn read_i16_array<const N: usize>(&mut self) -> Result<[i16; N], String> {
        let mut values = [0; N];
        for value in &mut values {
            *value = self.read_i16()?;
        }
        Ok(values)
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, String> {
        Ok(self.read_u8()? != 0)
    }

    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    #[inline]
    pub fn read_raw(&mut self, count: usize) -> Result<&[u8], String> {
        self.take(count)
    }

    // Length-prefixed (u32) sub-buffer.
    pub fn write_chunk(&mut self, chunk: &SaveBuffer) {
        let len = u32::try_from(chunk.len()).unwrap_or_else(|_| panic!("Save chunk too large: {} bytes", chunk.len()));
        self.write_u32(len);
        self.write_raw(chunk.as_bytes());
    }

    pub fn read_chunk(&mut self) -> Result<SaveBuffer, String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        Ok(SaveBuffer::from_bytes(bytes.to_vec()))
    }

    // Writes `count` zeroed reserved bytes.
    #[inline]
    pub fn write_padding(&mut self, count: usize) {
        self.data.resize(self.data.len() + count, 0);
    }

    // Advances the read cursor past `count` reserved bytes.
    #[inline]
    pub fn skip(&mut self, count: usize) -> LoadResult {
        self.take(count)?;
        Ok(())
    }

    fn take(&mut self, count: usize) -> Result<&[u8], String> {
        if !self.is_valid(count) {
            return Err(format!("SaveBuffer exhausted: wanted {count} bytes at offset {}, only {} left",
                               self.cursor, self.remaining()));
        }
        let start = self.cursor;
        self.cursor += count;
        Ok(&self.data[start..self.cursor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_layout() {
        let mut buf = SaveBuffer::new();
        buf.write_i32(-2);
        buf.write_u16(0x1234);
        buf.write_padding(2);
        assert_eq!(buf.as_bytes(), &[0xFE, 0xFF, 0xFF, 0xFF, 0x34, 0x12, 0, 0]);

        assert_eq!(buf.read_i32(), Ok(-2));
        assert_eq!(buf.read_u16(), Ok(0x1234));
        assert!(buf.skip(2).is_ok());
        assert!(!buf.is_valid(1));
        assert!(buf.read_u8().is_err());
    }

    #[test]
    fn test_chunks() {
        let mut chunk = SaveBuffer::new();
        chunk.write_u8(7);
        chunk.write_i16(-300);

        let mut file = SaveBuffer::new();
        file.write_chunk(&chunk);
        file.write_chunk(&SaveBuffer::new());

        let mut first = file.read_chunk().unwrap();
        assert_eq!(first.read_u8(), Ok(7));
        assert_eq!(first.read_i16(), Ok(-300));
        assert!(file.read_chunk().unwrap().is_empty());
        assert!(file.read_chunk().is_err());
    }
}
