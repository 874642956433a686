/*
 * lib.rs
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

//! C FFI for treccia core. Encode returns a newly allocated NUL-terminated
//! string (free with treccia_free_string); decode returns a newly allocated
//! byte buffer (free with treccia_free_bytes, passing the same length).

use libc::{c_char, c_int, size_t};
use std::ffi::{CStr, CString};
use std::ptr;
use treccia_core::base64::{decode_block, DecodeState};

/// Encode `len` bytes at `input` as Base64. `break_lines` non-zero inserts a
/// newline every 72 output characters. Returns NULL only if `input` is NULL
/// with a non-zero `len`.
#[no_mangle]
pub extern "C" fn treccia_base64_encode(
    input: *const u8,
    len: size_t,
    break_lines: c_int,
) -> *mut c_char {
    if input.is_null() && len > 0 {
        return ptr::null_mut();
    }
    let bytes = if len == 0 {
        &[][..]
    } else {
        unsafe { std::slice::from_raw_parts(input, len) }
    };
    let encoded = treccia_core::base64::encode(bytes, break_lines != 0);
    // Base64 output never contains NUL.
    CString::new(encoded)
        .unwrap_or_else(|_| CString::new("").unwrap())
        .into_raw()
}

/// Decode the NUL-terminated Base64 string at `input`, skipping bytes outside
/// the alphabet. Writes the decoded length to `out_len` and returns the
/// buffer, or NULL if `input` or `out_len` is NULL.
#[no_mangle]
pub extern "C" fn treccia_base64_decode(input: *const c_char, out_len: *mut size_t) -> *mut u8 {
    if input.is_null() || out_len.is_null() {
        return ptr::null_mut();
    }
    let bytes = unsafe { CStr::from_ptr(input) }.to_bytes();
    let mut out = vec![0u8; (bytes.len() * 6 + 7) / 8];
    let mut state = DecodeState::new();
    let n = decode_block(&mut state, bytes, &mut out);
    out.truncate(n);
    let boxed = out.into_boxed_slice();
    unsafe {
        *out_len = boxed.len();
    }
    Box::into_raw(boxed) as *mut u8
}

/// Free a string returned by treccia_base64_encode.
#[no_mangle]
pub extern "C" fn treccia_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

/// Free a buffer returned by treccia_base64_decode. `len` must be the length
/// the decode call reported.
#[no_mangle]
pub extern "C" fn treccia_free_bytes(buf: *mut u8, len: size_t) {
    if !buf.is_null() {
        unsafe {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(buf, len)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_and_free() {
        let s = treccia_base64_encode(b"Man".as_ptr(), 3, 0);
        assert!(!s.is_null());
        let text = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
        assert_eq!(text, "TWFu");
        treccia_free_string(s);
    }

    #[test]
    fn decode_and_free() {
        let input = CString::new("TQ==").unwrap();
        let mut len: size_t = 0;
        let buf = treccia_base64_decode(input.as_ptr(), &mut len);
        assert!(!buf.is_null());
        assert_eq!(len, 1);
        assert_eq!(unsafe { std::slice::from_raw_parts(buf, len) }, b"M");
        treccia_free_bytes(buf, len);
    }

    #[test]
    fn null_inputs() {
        assert!(treccia_base64_encode(ptr::null(), 1, 0).is_null());
        let mut len: size_t = 0;
        assert!(treccia_base64_decode(ptr::null(), &mut len).is_null());
    }
}
