// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Framed binary snapshot of an index.
//!
//! ```text
//! ┌──────────┬─────────┬──────────────┬──────────────┬────────────┬──────────┐
//! │ "FZEX"   │ version │ payload len  │ JSON payload │ CRC32      │ "XEZF"   │
//! │ 4 bytes  │ 1 byte  │ u32 LE       │ len bytes    │ u32 LE     │ 4 bytes  │
//! └──────────┴─────────┴──────────────┴──────────────┴────────────┴──────────┘
//! ```
//!
//! The CRC covers everything before the footer. The footer magic is the header
//! magic reversed, so a truncated file fails fast. Anything that does not decode
//! cleanly is reported as [`FuseError::IncorrectIndexType`].

use std::io::{self, Write};

use crc32fast::Hasher as Crc32Hasher;
use serde::{Deserialize, Serialize};

use super::IndexRecord;
use crate::error::{FuseError, Result};
use crate::keys::Key;

/// Magic bytes: "FZEX" in ASCII (header)
pub const MAGIC: [u8; 4] = *b"FZEX";

/// Footer magic: "XEZF" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = *b"XEZF";

/// Current format version
pub const VERSION: u8 = 1;

/// magic + version + payload length
pub const HEADER_SIZE: usize = 9;

/// CRC32 + footer magic
pub const FOOTER_SIZE: usize = 8;

/// Maximum payload size: 256 MB (prevents huge allocations)
pub const MAX_PAYLOAD_SIZE: usize = 256 * 1024 * 1024;

/// Structural snapshot: normalized keys plus index records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub keys: Vec<Key>,
    pub records: Vec<IndexRecord>,
}

/// Header facts reported by [`inspect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotInfo {
    pub version: u8,
    pub payload_len: usize,
    pub crc32: u32,
    pub checksum_ok: bool,
}

/// Serialize `snapshot` into the framed format.
pub fn encode(snapshot: &IndexSnapshot) -> Result<Vec<u8>> {
    let payload = serde_json::to_vec(snapshot)?;
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len() + FOOTER_SIZE);
    write_frame(&mut out, &payload)?;
    Ok(out)
}

fn write_frame<W: Write>(w: &mut W, payload: &[u8]) -> io::Result<()> {
    let len = u32::try_from(payload.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "snapshot payload too large"))?;

    let mut header = [0u8; HEADER_SIZE];
    header[..4].copy_from_slice(&MAGIC);
    header[4] = VERSION;
    header[5..].copy_from_slice(&len.to_le_bytes());

    let mut hasher = Crc32Hasher::new();
    hasher.update(&header);
    hasher.update(payload);

    w.write_all(&header)?;
    w.write_all(payload)?;
    w.write_all(&hasher.finalize().to_le_bytes())?;
    w.write_all(&FOOTER_MAGIC)
}

/// Validate framing and checksum, then parse the payload.
pub fn decode(bytes: &[u8]) -> Result<IndexSnapshot> {
    let info = inspect(bytes)?;
    if !info.checksum_ok {
        tracing::warn!(expected = info.crc32, "snapshot checksum mismatch");
        return Err(FuseError::IncorrectIndexType);
    }
    let payload = &bytes[HEADER_SIZE..HEADER_SIZE + info.payload_len];
    serde_json::from_slice(payload).map_err(|err| {
        tracing::warn!(%err, "snapshot payload is not an index");
        FuseError::IncorrectIndexType
    })
}

/// Read the frame without parsing the payload.
///
/// Fails on bad magic, unknown version or truncation; a checksum mismatch is
/// reported in the returned info instead.
pub fn inspect(bytes: &[u8]) -> Result<SnapshotInfo> {
    if bytes.len() < HEADER_SIZE + FOOTER_SIZE || bytes[..4] != MAGIC {
        return Err(FuseError::IncorrectIndexType);
    }
    let version = bytes[4];
    if version != VERSION {
        tracing::warn!(version, "unsupported snapshot version");
        return Err(FuseError::IncorrectIndexType);
    }

    let payload_len = u32::from_le_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]) as usize;
    if payload_len > MAX_PAYLOAD_SIZE || bytes.len() != HEADER_SIZE + payload_len + FOOTER_SIZE {
        return Err(FuseError::IncorrectIndexType);
    }

    let footer = &bytes[HEADER_SIZE + payload_len..];
    if footer[4..] != FOOTER_MAGIC {
        return Err(FuseError::IncorrectIndexType);
    }
    let crc32 = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]);

    let mut hasher = Crc32Hasher::new();
    hasher.update(&bytes[..HEADER_SIZE + payload_len]);

    Ok(SnapshotInfo {
        version,
        payload_len,
        crc32,
        checksum_ok: hasher.finalize() == crc32,
    })
}
