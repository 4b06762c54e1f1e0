// Copyright 2016 The codepoints Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Code point utilities for UTF-16 text.
//!
//! Decodes surrogate pairs, re-encodes code points, and splits code unit
//! sequences into code-point-sized fragments. Malformed sequences are
//! substituted with U+FFFD rather than reported as errors.

#![allow(clippy::len_without_is_empty)]

extern crate smallvec;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

pub mod code_units;
pub mod codepoint;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod split;

pub use crate::code_units::{encode_codepoint, CodeUnits};
pub use crate::codepoint::{
    codepoint_at, combine_surrogates, is_leading_surrogate, is_surrogate, is_trailing_surrogate,
    MAX_CODE_POINT, NO_CODE_POINT, REPLACEMENT_CHARACTER,
};
pub use crate::split::{split_codepoints, Codepoints};
