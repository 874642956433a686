/*
 * oneshot.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Treccia, a streaming Base64 codec library.
 *
 * Treccia is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Treccia is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Treccia.  If not, see <http://www.gnu.org/licenses/>.
 */

//! One-shot drivers over the streaming state machines. These are the entry
//! points callers normally use; the block API remains available for true
//! incremental conversion.

use crate::base64::decoder::{decode_block, DecodeState};
use crate::base64::encoder::{encode_block, encode_block_end, EncodeState, CHARS_PER_LINE};

/// Encode `input` as Base64. With `break_lines`, a newline is inserted every
/// 72 output characters and after the final group. Total over all inputs.
pub fn encode(input: &[u8], break_lines: bool) -> String {
    let mut chars = (input.len() + 2) / 3 * 4;
    if break_lines {
        let mut lines = chars / CHARS_PER_LINE;
        if chars % CHARS_PER_LINE > 0 {
            lines += 1;
        }
        chars += lines;
    }
    let mut out = vec![0u8; chars];
    let mut state = EncodeState::new(break_lines);
    let mut written = encode_block(&mut state, input, &mut out);
    written += encode_block_end(&mut state, &mut out[written..]);
    // A mismatch means the length prediction above and the state machine
    // disagree; that is a defect, not bad input.
    assert_eq!(written, out.len(), "encoded length mismatch");
    String::from_utf8(out).expect("base64 output is ASCII")
}

/// Decode Base64 `input`, skipping padding, whitespace, and any other bytes
/// outside the alphabet. Total over all inputs; a truncated final group is
/// silently dropped.
pub fn decode(input: &str) -> Vec<u8> {
    let src = input.as_bytes();
    let mut out = vec![0u8; (src.len() * 6 + 7) / 8];
    let mut state = DecodeState::new();
    let n = decode_block(&mut state, src, &mut out);
    out.truncate(n);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use rand::Rng;

    #[test]
    fn empty_input() {
        assert_eq!(encode(b"", false), "");
        assert_eq!(encode(b"", true), "");
        assert_eq!(decode(""), b"");
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(b"Man", false), "TWFu");
        assert_eq!(encode(b"Ma", false), "TWE=");
        assert_eq!(encode(b"M", false), "TQ==");
    }

    #[test]
    fn round_trip() {
        let inputs: [&[u8]; 5] = [b"", b"f", b"fo", b"foo", b"Many hands make light work."];
        for input in inputs {
            assert_eq!(decode(&encode(input, false)), input);
            assert_eq!(decode(&encode(input, true)), input);
        }
    }

    #[test]
    fn wrap_boundary_at_54_bytes() {
        // 54 bytes is exactly 72 output characters: one trailing newline,
        // nothing embedded.
        let out = encode(&[0x55u8; 54], true);
        assert_eq!(out.len(), 73);
        assert!(out.ends_with('\n'));
        assert!(!out[..72].contains('\n'));
    }

    #[test]
    fn wrap_boundary_at_55_bytes() {
        let out = encode(&[0x55u8; 55], true);
        assert_eq!(out.len(), 78);
        assert_eq!(out.as_bytes()[72], b'\n');
        assert!(out.ends_with('\n'));
        assert_eq!(out.matches('\n').count(), 2);
    }

    #[test]
    fn decode_tolerates_whitespace_and_garbage() {
        assert_eq!(decode("TWFu\nbg=="), b"Mann");
        assert_eq!(decode("T!W@F#u"), decode("TWFu"));
    }

    #[test]
    fn agrees_with_ecosystem_engine() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(0..512);
            let mut data = vec![0u8; len];
            rng.fill(data.as_mut_slice());
            assert_eq!(encode(&data, false), BASE64.encode(&data));
            let wrapped = encode(&data, true);
            assert_eq!(
                BASE64.decode(wrapped.replace('\n', "")).unwrap(),
                data
            );
            assert_eq!(decode(&wrapped), data);
        }
    }

    #[test]
    fn every_length_up_to_three_lines_round_trips() {
        for len in 0..=170 {
            let data: Vec<u8> = (0..len as u8).collect();
            assert_eq!(decode(&encode(&data, true)), data, "len {}", len);
            assert_eq!(decode(&encode(&data, false)), data, "len {}", len);
        }
    }
}
