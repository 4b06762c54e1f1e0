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

//! Decoding code points from UTF-16 code units.
//!
//! Code points are `i32` in the ICU `UChar32` convention: every decoded
//! value is non-negative, leaving negative values free to mean "no code
//! unit exists at this position".

/// The code point substituted for malformed code unit sequences, U+FFFD.
///
/// This is the only observable signal that an input was malformed; a
/// literal U+FFFD in well-formed input is indistinguishable from a
/// substituted one.
pub const REPLACEMENT_CHARACTER: i32 = 0xFFFD;

/// Returned by [`codepoint_at`] when no code unit exists at the queried
/// position. Negative, so it is disjoint from every decodable value.
pub const NO_CODE_POINT: i32 = -1;

/// The largest valid Unicode code point, U+10FFFF.
pub const MAX_CODE_POINT: i32 = 0x10FFFF;

pub(crate) const LEADING_SURROGATE_START: i32 = 0xD800;
pub(crate) const TRAILING_SURROGATE_START: i32 = 0xDC00;
const SURROGATE_END: i32 = 0xE000;

/// Returns whether `value` is in the leading surrogate range
/// [0xD800, 0xDC00).
#[inline]
pub fn is_leading_surrogate(value: i32) -> bool {
    LEADING_SURROGATE_START <= value && value < TRAILING_SURROGATE_START
}

/// Returns whether `value` is in the trailing surrogate range
/// [0xDC00, 0xE000).
#[inline]
pub fn is_trailing_surrogate(value: i32) -> bool {
    TRAILING_SURROGATE_START <= value && value < SURROGATE_END
}

/// Returns whether `value` is in either surrogate range.
#[inline]
pub fn is_surrogate(value: i32) -> bool {
    LEADING_SURROGATE_START <= value && value < SURROGATE_END
}

/// Given two code units, returns the first code point they represent.
///
/// A leading surrogate followed by a trailing surrogate decodes to the
/// supplementary-plane code point the pair represents. A leading surrogate
/// followed by anything else, or a trailing surrogate in first position,
/// decodes to [`REPLACEMENT_CHARACTER`]. A unit outside both surrogate
/// ranges is its own code point and the second argument is ignored.
///
/// Total over all 32-bit pairs; values that are not code units take the
/// pass-through rule, so [`NO_CODE_POINT`] composes with it.
#[inline]
pub fn combine_surrogates(leading: i32, trailing: i32) -> i32 {
    if is_leading_surrogate(leading) {
        if is_trailing_surrogate(trailing) {
            0x10000
                + ((leading - LEADING_SURROGATE_START) << 10)
                + (trailing - TRAILING_SURROGATE_START)
        } else {
            REPLACEMENT_CHARACTER
        }
    } else if is_trailing_surrogate(leading) {
        REPLACEMENT_CHARACTER
    } else {
        leading
    }
}

/// Returns the code point starting at `units[index]`, reading the unit at
/// `index + 1` as well when the two form a surrogate pair.
///
/// Never fails: a dangling leading surrogate at the end of the sequence
/// decodes to [`REPLACEMENT_CHARACTER`], and an `index` at or past the end
/// returns [`NO_CODE_POINT`].
#[inline]
pub fn codepoint_at(units: &[u16], index: usize) -> i32 {
    let leading = units.get(index).map_or(NO_CODE_POINT, |&unit| i32::from(unit));
    let trailing = index
        .checked_add(1)
        .and_then(|next| units.get(next))
        .map_or(NO_CODE_POINT, |&unit| i32::from(unit));
    combine_surrogates(leading, trailing)
}
