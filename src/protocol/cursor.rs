//! Bounded Byte Cursor
//!
//! Pengganti manual offset arithmetic: setiap write menggeser posisi
//! internal dan dicek terhadap kapasitas buffer. Mixed-endianness writes
//! untuk DLT (header big-endian, argument little-endian).

use super::message::DLT_ID_LEN;

/// Write cursor di atas sebuah byte buffer.
///
/// Writes melewati kapasitas adalah programming error: debug-assert,
/// dan slice indexing akan panic - tidak pernah menulis di luar buffer.
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline(always)]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Cursor yang mulai menulis di offset tertentu.
    #[inline(always)]
    pub fn at(buf: &'a mut [u8], pos: usize) -> Self {
        debug_assert!(pos <= buf.len());
        Self { buf, pos }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Lewati n bytes tanpa menulis (untuk field yang sudah prebuilt).
    #[inline(always)]
    pub fn skip(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.buf.len());
        self.pos += n;
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) {
        debug_assert!(self.pos < self.buf.len());
        self.buf[self.pos] = value;
        self.pos += 1;
    }

    #[inline(always)]
    pub fn write_u16_be(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u16_le(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    pub fn write_u32_be(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u32_le(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline(always)]
    pub fn write_bytes(&mut self, data: &[u8]) {
        debug_assert!(self.pos + data.len() <= self.buf.len());
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
    }

    /// Encode identifier ke field 4-byte: truncate jika lebih panjang,
    /// zero-pad jika lebih pendek. Identifier kosong valid (4 zero bytes).
    #[inline(always)]
    pub fn write_id(&mut self, id: &str) {
        debug_assert!(self.pos + DLT_ID_LEN <= self.buf.len());
        let id = id.as_bytes();
        let n = id.len().min(DLT_ID_LEN);
        let field = &mut self.buf[self.pos..self.pos + DLT_ID_LEN];
        field[..n].copy_from_slice(&id[..n]);
        for b in &mut field[n..] {
            *b = 0;
        }
        self.pos += DLT_ID_LEN;
    }
}
