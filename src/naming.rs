// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashSet;

use crate::common::Result;
use crate::registry_err;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the first unused anchor name from the sequence
/// `A, B, .. Z, AA, AB, .. AZ, BA, .. ZZ`.
///
/// This is a linear scan over the generated sequence, not an index off the
/// current count, so names freed up by external reuse (or any gap in
/// `existing`) are filled before longer names are minted. Exhausting the
/// two-letter space means the caller has created hundreds of anchors, which
/// is a wiring defect rather than a user-recoverable condition.
pub fn next_name(existing: &HashSet<String>) -> Result<String> {
    for b in LETTERS {
        let candidate = (*b as char).to_string();
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
    }

    for a in LETTERS {
        for b in LETTERS {
            let candidate = format!("{}{}", *a as char, *b as char);
            if !existing.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }

    registry_err!(NamesExhausted, format!("all {} names in use", existing.len()))
}
