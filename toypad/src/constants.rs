// toypad/src/constants.rs
//! Common protocol constants used across the crate

/// Size of every USB packet exchanged with the host, in bytes
pub const PACKET_LEN: usize = 32;

/// Frame kind byte used for unsolicited device notifications
pub const FRAME_KIND_REQUEST: u8 = 0x56;

/// Frame kind byte used for replies (and for host commands)
pub const FRAME_KIND_RESPONSE: u8 = 0x55;

/// Frame header: kind(1) + length(1)
pub const FRAME_HEADER_LEN: usize = 2;

/// Largest payload that still leaves room for the checksum in one packet
pub const MAX_PAYLOAD_LEN: usize = PACKET_LEN - FRAME_HEADER_LEN - 1;

/// Largest response data (payload minus the correlation id)
pub const MAX_RESPONSE_DATA_LEN: usize = MAX_PAYLOAD_LEN - 1;

/// Number of resident token slots
pub const MAX_TOKENS: usize = 7;

/// Number of display boxes on the pad surface
pub const BOX_COUNT: usize = 7;

/// Token UID length and fixed framing bytes
pub const UID_LEN: usize = 7;
pub const UID_FIRST_BYTE: u8 = 0x04;
pub const UID_LAST_BYTE: u8 = 0x80;

/// Emulated token memory: 45 pages of 4 bytes
pub const PAGE_LEN: usize = 4;
pub const PAGE_COUNT: usize = 45;
pub const TOKEN_MEMORY_LEN: usize = PAGE_LEN * PAGE_COUNT;

/// READ returns four consecutive pages
pub const READ_LEN: usize = 16;

/// Page numbers accepted by WRITE (pages past the memory image are ignored)
pub const WRITABLE_PAGE_LIMIT: u8 = 64;

/// Vehicle layout inside token memory
pub const VEHICLE_UPGRADE0_PAGE: usize = 0x23;
pub const VEHICLE_ID_PAGE: usize = 0x24;
pub const VEHICLE_UPGRADE1_PAGE: usize = 0x25;
pub const VEHICLE_MARKER_PAGE: usize = 0x26;
pub const VEHICLE_MARKER: [u8; PAGE_LEN] = [0x00, 0x01, 0x00, 0x00];

/// Status codes placed in the first data byte of READ/MODEL replies
pub const STATUS_OK: u8 = 0x00;
pub const STATUS_NOT_FOUND: u8 = 0xF2;
pub const STATUS_NOT_MINIFIGURE: u8 = 0xF9;

/// Reply to WAKE
pub const WAKE_REPLY: &[u8; 13] = b"(c) LEGO 2014";

/// Cipher key in effect at session start
pub const DEFAULT_TEA_KEY: [u8; 16] = [
    0x55, 0xFE, 0xF6, 0xB0, 0x62, 0xBF, 0x0B, 0x41, 0xC9, 0xB3, 0x7C, 0xB4, 0x97, 0x3E, 0x29, 0x7B,
];

/// Delay between consecutive placements/removals in batch operations
pub const DEFAULT_PACING_MS: u64 = 150;

/// Capacity of the outbound event queue
pub const DEFAULT_EVENT_CAPACITY: usize = 32;

/// Persisted display name field width
pub const NAME_LEN: usize = 16;

/// Persisted record sizes
pub const TOKEN_RECORD_LEN: usize = 1 + 4 + 4 + UID_LEN + TOKEN_MEMORY_LEN + NAME_LEN;
pub const BOX_RECORD_LEN: usize = 4;
pub const TOYPAD_RECORD_LEN: usize = MAX_TOKENS * TOKEN_RECORD_LEN + BOX_COUNT * BOX_RECORD_LEN;

/// Marker byte for "no slot" in persisted records
pub const NO_SLOT: u8 = 0xFF;

/// Favorites list capacity
pub const MAX_FAVORITES: usize = 100;
