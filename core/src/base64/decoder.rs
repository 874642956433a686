/*
 * decoder.rs
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

//! Resumable Base64 decoder. Bytes outside the alphabet (padding, whitespace,
//! anything else) are skipped, so wrapped or hand-mangled text decodes without
//! preprocessing. There is no finalize step: a trailing fragment smaller than
//! one output byte is discarded.

use crate::base64::alphabet::decode_value;

/// Position within the current 4-character input group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecodeStep {
    A,
    B,
    C,
    D,
}

/// Decoder state for one conversion. Not for reuse across conversions.
pub struct DecodeState {
    step: DecodeStep,
    /// Partially assembled output byte, left-justified.
    pending: u8,
}

impl DecodeState {
    pub fn new() -> Self {
        DecodeState {
            step: DecodeStep::A,
            pending: 0,
        }
    }
}

impl Default for DecodeState {
    fn default() -> Self {
        DecodeState::new()
    }
}

/// Decode `src` into `dst`, resuming from `state`. Returns the number of
/// bytes written. A group left incomplete at the end of `src` is carried in
/// `state` and completed by a later call.
///
/// `dst` must have room for `(src.len() * 6 + 7) / 8` bytes; skipped
/// characters only ever reduce the output below that bound.
pub fn decode_block(state: &mut DecodeState, src: &[u8], dst: &mut [u8]) -> usize {
    let mut written = 0;
    for &byte in src {
        let value = decode_value(byte);
        if value < 0 {
            continue;
        }
        let fragment = value as u8;
        match state.step {
            DecodeStep::A => {
                state.pending = fragment << 2;
                state.step = DecodeStep::B;
            }
            DecodeStep::B => {
                dst[written] = state.pending | (fragment >> 4);
                written += 1;
                state.pending = (fragment & 0x0f) << 4;
                state.step = DecodeStep::C;
            }
            DecodeStep::C => {
                dst[written] = state.pending | (fragment >> 2);
                written += 1;
                state.pending = (fragment & 0x03) << 6;
                state.step = DecodeStep::D;
            }
            DecodeStep::D => {
                dst[written] = state.pending | fragment;
                written += 1;
                state.pending = 0;
                state.step = DecodeStep::A;
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(chunks: &[&[u8]]) -> Vec<u8> {
        let total: usize = chunks.iter().map(|c| c.len()).sum();
        let mut out = vec![0u8; (total * 6 + 7) / 8];
        let mut state = DecodeState::new();
        let mut written = 0;
        for chunk in chunks {
            written += decode_block(&mut state, chunk, &mut out[written..]);
        }
        out.truncate(written);
        out
    }

    #[test]
    fn full_group() {
        assert_eq!(decode_all(&[b"TWFu"]), b"Man");
    }

    #[test]
    fn padding_is_skipped() {
        assert_eq!(decode_all(&[b"TWE="]), b"Ma");
        assert_eq!(decode_all(&[b"TQ=="]), b"M");
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(decode_all(&[b"TWFu\nbg=="]), b"Mann");
        assert_eq!(decode_all(&[b" T W\tF\r\nu "]), b"Man");
    }

    #[test]
    fn garbage_is_skipped() {
        assert_eq!(decode_all(&[b"T!W@F#u"]), decode_all(&[b"TWFu"]));
    }

    #[test]
    fn group_split_across_calls() {
        let whole = decode_all(&[b"TWFueSBoYW5kcw=="]);
        assert_eq!(whole, b"Many hands");
        let input = b"TWFueSBoYW5kcw==";
        for i in 0..input.len() {
            let parts: [&[u8]; 2] = [&input[..i], &input[i..]];
            assert_eq!(decode_all(&parts), whole, "split at {}", i);
        }
    }

    #[test]
    fn trailing_fragment_is_discarded() {
        // A lone character carries only 6 bits, not enough for a byte.
        assert_eq!(decode_all(&[b"T"]), b"");
        // "TQ" carries 12 bits: one byte out, 4 bits dropped.
        assert_eq!(decode_all(&[b"TQ"]), b"M");
    }
}
