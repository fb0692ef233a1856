//! DLT Wire Format Constants
//!
//! Layout satu beacon packet (HTYP = 0x35, tanpa Session-ID):
//!
//! ```text
//! ┌────────┬────────┬────────────┬─────────┬────────────┐
//! │ HTYP 1B│ MCNT 1B│ LEN 2B BE  │ ECU 4B  │ TMSP 4B BE │  standard header (12B)
//! ├────────┼────────┼────────────┴─────────┴────────────┤
//! │ MSIN 1B│ NOAR 1B│ APID 4B │ CTID 4B                 │  extended header (10B)
//! ├────────┴────────┴─────────┴─────────────────────────┤
//! │ type-info 4B LE │ len 2B LE │ string bytes + NUL    │  argument
//! └─────────────────┴───────────┴───────────────────────┘
//! ```
//!
//! Identity fields (ECU/APID/CTID) adalah ASCII 4 bytes: truncate jika
//! lebih panjang, zero-pad jika lebih pendek.

/// ECU-ID / Application-ID / Context-ID field width.
pub const DLT_ID_LEN: usize = 4;

// ===== Standard header =====

pub const STDHDR_OFF_HTYP: usize = 0;
pub const STDHDR_OFF_MCNT: usize = 1;
pub const STDHDR_OFF_LEN: usize = 2;
pub const STDHDR_OFF_ECUID: usize = 4;
pub const STDHDR_OFF_TMSP: usize = STDHDR_OFF_ECUID + DLT_ID_LEN;

/// Standard header length untuk HTYP 0x35 (ECU-ID + timestamp, tanpa
/// Session-ID).
pub const STDHDR_LEN: usize = STDHDR_OFF_TMSP + 4;

/// HTYP.UEH: Use Extended Header
pub const HTYP_UEH: u8 = 1 << 0;
/// HTYP.MSBF: Most Significant Byte First (payload endianness, tidak dipakai)
pub const HTYP_MSBF: u8 = 1 << 1;
/// HTYP.WEID: With ECU ID
pub const HTYP_WEID: u8 = 1 << 2;
/// HTYP.WSID: With Session ID (tidak dipakai)
pub const HTYP_WSID: u8 = 1 << 3;
/// HTYP.WTMS: With Timestamp
pub const HTYP_WTMS: u8 = 1 << 4;
/// HTYP.VERS: Version 1
pub const HTYP_VERS1: u8 = 1 << 5;

/// Flags byte untuk semua beacon packet: extended header + ECU-ID +
/// timestamp + version 1 = 0x35.
pub const HTYP_BEACON: u8 = HTYP_UEH | HTYP_WEID | HTYP_WTMS | HTYP_VERS1;

// ===== Extended header =====

pub const EXTHDR_OFF_MSIN: usize = STDHDR_LEN;
pub const EXTHDR_OFF_NOAR: usize = STDHDR_LEN + 1;
pub const EXTHDR_OFF_APID: usize = STDHDR_LEN + 2;
pub const EXTHDR_OFF_CTID: usize = EXTHDR_OFF_APID + DLT_ID_LEN;

pub const EXTHDR_LEN: usize = 2 + DLT_ID_LEN + DLT_ID_LEN;

/// MSIN.VERB: verbose mode bit.
pub const MSIN_VERBOSE: u8 = 1 << 0;

/// Offset awal argument payload.
pub const PAYLOAD_OFF: usize = STDHDR_LEN + EXTHDR_LEN;

// ===== String argument =====

/// Verbose type-info: null-terminated ASCII string (STRG), ditulis LE.
pub const TYPE_INFO_STRING: u32 = 0x0000_0200;

pub const TYPE_INFO_LEN: usize = 4;
pub const STRING_LEN_FIELD: usize = 2;
pub const STRING_NUL_LEN: usize = 1;

/// Overhead per string argument: type-info + length field + terminator.
pub const ARG_OVERHEAD: usize = TYPE_INFO_LEN + STRING_LEN_FIELD + STRING_NUL_LEN;

// ===== Length budget =====

/// LEN field adalah u16, total packet tidak boleh melebihi ini.
pub const MAX_PACKET_LEN: usize = u16::MAX as usize;

/// Message text terpanjang yang masih muat dalam satu packet.
pub const MAX_MESSAGE_LEN: usize = MAX_PACKET_LEN - PAYLOAD_OFF - ARG_OVERHEAD;

/// DLT device time tick = 0.1 ms.
pub const TIMESTAMP_RESOLUTION_US: u64 = 100;

/// DLT log severity, high nibble dari MSIN.
///
/// Wire format mendukung severity per message; encoder memakai satu
/// default per instance dengan override per call.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Verbose = 6,
}

impl LogLevel {
    /// MSIN byte: severity nibble digeser ke high nibble, verbose bit set.
    #[inline(always)]
    pub fn msin(self) -> u8 {
        ((self as u8) << 4) | MSIN_VERBOSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets() {
        assert_eq!(STDHDR_LEN, 12);
        assert_eq!(EXTHDR_LEN, 10);
        assert_eq!(PAYLOAD_OFF, 22);
        assert_eq!(STDHDR_OFF_TMSP, 8);
        assert_eq!(EXTHDR_OFF_CTID, 18);
    }

    #[test]
    fn test_htyp_beacon_value() {
        // 0x35: UEH + WEID + WTMS + VERS1, tanpa WSID/MSBF
        assert_eq!(HTYP_BEACON, 0x35);
        assert_eq!(HTYP_BEACON & HTYP_WSID, 0);
        assert_eq!(HTYP_BEACON & HTYP_MSBF, 0);
    }

    #[test]
    fn test_msin_levels() {
        assert_eq!(LogLevel::Info.msin(), 0x41);
        assert_eq!(LogLevel::Fatal.msin(), 0x11);
        assert_eq!(LogLevel::Verbose.msin(), 0x61);
    }

    #[test]
    fn test_length_budget() {
        // 65535 - 22 header bytes - 7 argument overhead
        assert_eq!(MAX_MESSAGE_LEN, 65506);
    }
}
