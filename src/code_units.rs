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

//! An inline buffer holding the UTF-16 encoding of one code point.

use std::fmt;
use std::ops::Deref;

use smallvec::SmallVec;

use crate::codepoint::{
    codepoint_at, is_surrogate, LEADING_SURROGATE_START, MAX_CODE_POINT, REPLACEMENT_CHARACTER,
    TRAILING_SURROGATE_START,
};

const REPLACEMENT_UNIT: u16 = REPLACEMENT_CHARACTER as u16;

/// The UTF-16 encoding of a single code point: one code unit, or two for a
/// surrogate pair.
///
/// The units are stored inline; building a `CodeUnits` never allocates. A
/// `CodeUnits` always holds a well-formed encoding, so it renders as
/// exactly one character via `Display`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodeUnits {
    units: SmallVec<[u16; 2]>,
}

impl CodeUnits {
    #[inline]
    pub(crate) fn single(unit: u16) -> CodeUnits {
        CodeUnits { units: SmallVec::from_slice(&[unit]) }
    }

    #[inline]
    pub(crate) fn pair(leading: u16, trailing: u16) -> CodeUnits {
        CodeUnits { units: SmallVec::from_buf([leading, trailing]) }
    }

    /// Returns the code units in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Returns the number of code units, 1 or 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Decodes the buffer back into the code point it encodes.
    #[inline]
    pub fn to_codepoint(&self) -> i32 {
        codepoint_at(&self.units, 0)
    }
}

impl Deref for CodeUnits {
    type Target = [u16];

    #[inline]
    fn deref(&self) -> &[u16] {
        &self.units
    }
}

impl fmt::Display for CodeUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ch = char::from_u32(self.to_codepoint() as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
        write!(f, "{}", ch)
    }
}

impl From<char> for CodeUnits {
    #[inline]
    fn from(ch: char) -> CodeUnits {
        encode_codepoint(ch as i32)
    }
}

/// Returns the UTF-16 encoding of `codepoint`.
///
/// Values inside either surrogate range and values above
/// [`MAX_CODE_POINT`] are not encodable scalars; they are substituted with
/// [`REPLACEMENT_CHARACTER`] before encoding, as is any negative input.
/// Every integer maps to one or two code units; this never fails.
pub fn encode_codepoint(codepoint: i32) -> CodeUnits {
    let value = if is_surrogate(codepoint) || codepoint > MAX_CODE_POINT {
        REPLACEMENT_CHARACTER
    } else {
        codepoint
    };

    if value >= 0x10000 {
        let offset = value - 0x10000;
        CodeUnits::pair(
            (LEADING_SURROGATE_START + (offset >> 10)) as u16,
            (TRAILING_SURROGATE_START + (offset & 0x3FF)) as u16,
        )
    } else if value >= 0 {
        CodeUnits::single(value as u16)
    } else {
        CodeUnits::single(REPLACEMENT_UNIT)
    }
}
