//! Zero-Allocation DLT Packet Encoder
//!
//! Satu buffer 64KB di-allocate sekali; identity fields (HTYP, ECU-ID,
//! NOAR, APID, CTID) ditulis saat construction. Per encode hanya field
//! yang berubah di-patch: counter, length, timestamp, MSIN, dan payload.
//!
//! Single-writer contract: encoder mengambil `&mut self` per call -
//! counter dan working buffer dimutasi in place, tidak ada internal
//! locking. Sharing antar thread butuh sinkronisasi eksternal.

use std::time::Instant;

use super::cursor::Cursor;
use super::message::{
    DLT_ID_LEN, HTYP_BEACON, LogLevel, MAX_PACKET_LEN, PAYLOAD_OFF, STDHDR_OFF_MCNT,
    STRING_LEN_FIELD, STRING_NUL_LEN, TIMESTAMP_RESOLUTION_US, TYPE_INFO_LEN, TYPE_INFO_STRING,
};
use crate::DltError;

/// DLT verbose-mode encoder untuk satu identity triple.
///
/// Terikat ke satu ECU/Application/Context identity dan satu outgoing
/// message counter. Packet yang dihasilkan hanya valid sampai encode
/// berikutnya (buffer di-reuse).
pub struct DltEncoder {
    buffer: Box<[u8]>,
    count: u8,
    level: LogLevel,
    epoch: Instant,
}

impl DltEncoder {
    /// Encoder dengan default severity Info (level yang dipakai beacon
    /// aslinya; wire format tetap per-message, lihat `encode_with_level`).
    pub fn new(ecu_id: &str, app_id: &str, ctx_id: &str) -> Self {
        Self::with_level(ecu_id, app_id, ctx_id, LogLevel::Info)
    }

    /// Encoder dengan default severity eksplisit.
    ///
    /// Identifier boleh sembarang panjang: di-truncate ke 4 bytes atau
    /// zero-padded. Construction tidak pernah gagal.
    pub fn with_level(ecu_id: &str, app_id: &str, ctx_id: &str, level: LogLevel) -> Self {
        let mut buffer = vec![0u8; MAX_PACKET_LEN].into_boxed_slice();

        // Prebuild semua field yang tidak berubah antar packet.
        let mut cur = Cursor::new(&mut buffer);
        cur.write_u8(HTYP_BEACON);
        cur.skip(3); // MCNT + LEN: per packet
        cur.write_id(ecu_id);
        cur.skip(4); // TMSP: per packet
        cur.skip(1); // MSIN: per packet (severity bisa di-override)
        cur.write_u8(1); // NOAR: selalu satu string argument
        cur.write_id(app_id);
        cur.write_id(ctx_id);
        debug_assert_eq!(cur.position(), PAYLOAD_OFF);

        Self {
            buffer,
            count: 0,
            level,
            epoch: Instant::now(),
        }
    }

    /// Encode satu message dengan default severity.
    ///
    /// Sukses: returns slice sepanjang persis LEN field, counter naik
    /// (wrap modulo 256). Gagal (`InvalidLength`): tidak ada mutasi.
    #[inline]
    pub fn encode(&mut self, message: &str) -> Result<&[u8], DltError> {
        self.encode_with_level(message, self.level)
    }

    /// Encode satu message dengan severity override per call.
    pub fn encode_with_level(&mut self, message: &str, level: LogLevel) -> Result<&[u8], DltError> {
        let string_len = message.len() + STRING_NUL_LEN;
        let packet_len = PAYLOAD_OFF + TYPE_INFO_LEN + STRING_LEN_FIELD + string_len;

        // Length check sebelum mutasi apapun: counter tidak boleh naik
        // untuk packet yang tidak pernah dibentuk.
        if packet_len > MAX_PACKET_LEN {
            return Err(DltError::InvalidLength {
                requested: packet_len,
                max: MAX_PACKET_LEN,
            });
        }

        let timestamp = self.device_time();

        // Patch mutable fields, skip yang sudah prebuilt.
        let mut cur = Cursor::at(&mut self.buffer, STDHDR_OFF_MCNT);
        cur.write_u8(self.count);
        cur.write_u16_be(packet_len as u16);
        cur.skip(DLT_ID_LEN); // ECU-ID
        cur.write_u32_be(timestamp);
        cur.write_u8(level.msin());
        cur.skip(1 + DLT_ID_LEN + DLT_ID_LEN); // NOAR + APID + CTID
        cur.write_u32_le(TYPE_INFO_STRING);
        cur.write_u16_le(string_len as u16);
        cur.write_bytes(message.as_bytes());
        cur.write_u8(0);
        debug_assert_eq!(cur.position(), packet_len);

        self.count = self.count.wrapping_add(1);
        Ok(&self.buffer[..packet_len])
    }

    /// Message counter berikutnya (MCNT byte dari packet berikutnya).
    #[inline(always)]
    pub fn count(&self) -> u8 {
        self.count
    }

    #[inline(always)]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Device time: elapsed sejak construction dalam tick 0.1 ms,
    /// truncating, wrap sebagai u32.
    #[inline(always)]
    fn device_time(&self) -> u32 {
        (self.epoch.elapsed().as_micros() / u128::from(TIMESTAMP_RESOLUTION_US)) as u32
    }
}
