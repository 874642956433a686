/*
 * encoder.rs
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

//! Resumable Base64 encoder. Input is consumed in 3-byte groups; a call may
//! start or end mid-group, with the carried bits held in the state object.

use crate::base64::alphabet::encode_value;

/// Output line width when line breaking is enabled.
pub const CHARS_PER_LINE: usize = 72;

const GROUPS_PER_LINE: usize = CHARS_PER_LINE / 4;

/// How many bytes of the current 3-byte input group have been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EncodeStep {
    A,
    B,
    C,
}

/// Encoder state for one conversion. Feed bytes with [`encode_block`]; when
/// the input is exhausted, flush padding with [`encode_block_end`]. Not for
/// reuse across conversions.
pub struct EncodeState {
    step: EncodeStep,
    /// Up to 6 bits of the next output character, right-justified.
    pending: u8,
    /// 4-character groups emitted since the last newline. Stays 0 when line
    /// breaking is disabled.
    line_groups: usize,
    break_lines: bool,
}

impl EncodeState {
    pub fn new(break_lines: bool) -> Self {
        EncodeState {
            step: EncodeStep::A,
            pending: 0,
            line_groups: 0,
            break_lines,
        }
    }
}

/// Encode `src` into `dst`, resuming from `state`. Returns the number of
/// characters written. Never emits padding; a trailing partial group is
/// carried in `state` until [`encode_block_end`].
///
/// `dst` must have room for the worst case: `(src.len() / 3 + 1) * 4`
/// characters, plus `src.len() / 54 + 1` newlines when line breaking is on.
pub fn encode_block(state: &mut EncodeState, src: &[u8], dst: &mut [u8]) -> usize {
    let mut written = 0;
    for &byte in src {
        match state.step {
            EncodeStep::A => {
                dst[written] = encode_value(byte >> 2);
                written += 1;
                state.pending = (byte & 0x03) << 4;
                state.step = EncodeStep::B;
            }
            EncodeStep::B => {
                dst[written] = encode_value(state.pending | (byte >> 4));
                written += 1;
                state.pending = (byte & 0x0f) << 2;
                state.step = EncodeStep::C;
            }
            EncodeStep::C => {
                dst[written] = encode_value(state.pending | (byte >> 6));
                dst[written + 1] = encode_value(byte & 0x3f);
                written += 2;
                state.pending = 0;
                state.step = EncodeStep::A;
                if state.break_lines {
                    state.line_groups += 1;
                    if state.line_groups == GROUPS_PER_LINE {
                        dst[written] = b'\n';
                        written += 1;
                        state.line_groups = 0;
                    }
                }
            }
        }
    }
    written
}

/// Finalize a conversion: flush any partial group with padding and, when line
/// breaking is on and the current line is non-empty, a trailing newline.
/// Returns the number of characters written (at most 4). Call exactly once.
pub fn encode_block_end(state: &mut EncodeState, dst: &mut [u8]) -> usize {
    let mut written = 0;
    match state.step {
        EncodeStep::A => {}
        EncodeStep::B => {
            dst[0] = encode_value(state.pending);
            dst[1] = b'=';
            dst[2] = b'=';
            written = 3;
            if state.break_lines {
                state.line_groups += 1;
            }
        }
        EncodeStep::C => {
            dst[0] = encode_value(state.pending);
            dst[1] = b'=';
            written = 2;
            if state.break_lines {
                state.line_groups += 1;
            }
        }
    }
    if state.break_lines && state.line_groups > 0 {
        dst[written] = b'\n';
        written += 1;
    }
    written
}
