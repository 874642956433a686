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

//! Treccia core: a streaming Base64 codec (resumable encoder/decoder state
//! machines with one-shot drivers) and small byte-string utilities.

pub mod base64;
pub mod text;
