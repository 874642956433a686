/*
 * mod.rs
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

//! Streaming Base64 codec (resumable block transforms) and one-shot drivers.

mod alphabet;
mod decoder;
mod encoder;
mod oneshot;

pub use decoder::{decode_block, DecodeState};
pub use encoder::{encode_block, encode_block_end, EncodeState, CHARS_PER_LINE};
pub use oneshot::{decode, encode};
