// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snapshot decoding.
//!
//! Random bytes must be rejected cleanly. Anything that does decode must
//! survive an encode/decode cycle unchanged.

#![no_main]

use fuzzex::index::snapshot::{decode, encode, inspect};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = inspect(data);

    if let Ok(snapshot) = decode(data) {
        let bytes = encode(&snapshot).expect("decoded snapshot re-encodes");
        let again = decode(&bytes).expect("re-encoded snapshot decodes");
        assert_eq!(snapshot, again);
    }
});
