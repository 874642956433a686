/*
 * text.rs
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

//! Small byte-string helpers used alongside the codec.

/// Strip ASCII whitespace from both ends. Borrows, never copies.
pub fn trim(mut slice: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = slice {
        if !first.is_ascii_whitespace() {
            break;
        }
        slice = rest;
    }
    while let [rest @ .., last] = slice {
        if !last.is_ascii_whitespace() {
            break;
        }
        slice = rest;
    }
    slice
}

/// Split on `delim`, keeping empty fields. A trailing delimiter yields a
/// trailing empty slice.
pub fn split(input: &[u8], delim: u8) -> Vec<&[u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    for (i, &b) in input.iter().enumerate() {
        if b == delim {
            result.push(&input[start..i]);
            start = i + 1;
        }
    }
    result.push(&input[start..]);
    result
}

/// Pop the prefix before the first `delim`, advancing `input` past the
/// delimiter. `None` when `delim` does not occur; `input` is left untouched.
pub fn split_first<'a>(input: &mut &'a [u8], delim: u8) -> Option<&'a [u8]> {
    let pos = input.iter().position(|&b| b == delim)?;
    let result = &input[..pos];
    *input = &input[pos + 1..];
    Some(result)
}

/// Lowercase ASCII letters in place; other bytes are untouched.
pub fn to_lower(text: &mut [u8]) {
    for b in text {
        if b.is_ascii_uppercase() {
            *b += b'a' - b'A';
        }
    }
}

/// Parse the whole string as an unsigned integer in the given radix.
/// Empty input or trailing garbage yields `None`.
pub fn parse_uint(s: &str, radix: u32) -> Option<u32> {
    u32::from_str_radix(s, radix).ok()
}
