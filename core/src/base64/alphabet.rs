/*
 * alphabet.rs
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

//! The Base64 alphabet (RFC 4648 §4) and its inverse table.

const ENCODE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Map a 6-bit value to its alphabet character. Values above 63 map to '='
/// (the padding sentinel, used only by the encoder's finalize step).
pub(crate) fn encode_value(value: u8) -> u8 {
    if value > 63 {
        return b'=';
    }
    ENCODE_TABLE[value as usize]
}

/// Bytes below '+' are outside the table and therefore invalid.
const DECODE_BASE: u8 = b'+';

/// Inverse table covering '+' (43) through 'z' (122). Everything else,
/// including '=' and whitespace, stays at the invalid marker.
const DECODE_TABLE: [i8; 80] = {
    let mut t = [-1i8; 80];
    t[(b'+' - DECODE_BASE) as usize] = 62;
    t[(b'/' - DECODE_BASE) as usize] = 63;
    let mut i = 0u8;
    while i < 10 {
        t[(b'0' + i - DECODE_BASE) as usize] = (52 + i) as i8;
        i = i.wrapping_add(1);
    }
    let mut i = 0u8;
    while i < 26 {
        t[(b'A' + i - DECODE_BASE) as usize] = i as i8;
        t[(b'a' + i - DECODE_BASE) as usize] = (26 + i) as i8;
        i = i.wrapping_add(1);
    }
    t
};

/// Map an input byte to its 6-bit value, or a negative marker when the byte
/// is not part of the alphabet.
pub(crate) fn decode_value(byte: u8) -> i8 {
    match byte.checked_sub(DECODE_BASE) {
        Some(i) if (i as usize) < DECODE_TABLE.len() => DECODE_TABLE[i as usize],
        _ => -1,
    }
}
