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

//! Splitting a code unit sequence into code point fragments.

use std::iter::FusedIterator;

use crate::code_units::CodeUnits;
use crate::codepoint::codepoint_at;

/// Splits `units` into an ordered sequence of code-point-sized fragments.
///
/// Each fragment holds one code unit, or two when the input carries a
/// valid surrogate pair. A position that does not decode (a dangling
/// leading surrogate, or a trailing surrogate with nothing before it)
/// produces a one-unit U+FFFD fragment in place of the raw unit, so every
/// fragment is well-formed and splitting a fragment yields that fragment
/// back.
#[inline]
pub fn split_codepoints(units: &[u16]) -> Codepoints<'_> {
    Codepoints { units, pos: 0 }
}

/// Iterator over the code point fragments of a code unit sequence.
///
/// Returned by [`split_codepoints`]. Borrows the input and keeps no state
/// beyond its position; restart by calling [`split_codepoints`] again.
#[derive(Clone, Debug)]
pub struct Codepoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> Iterator for Codepoints<'a> {
    type Item = CodeUnits;

    fn next(&mut self) -> Option<CodeUnits> {
        let codepoint = codepoint_at(self.units, self.pos);
        if codepoint >= 0x10000 {
            let fragment = CodeUnits::pair(self.units[self.pos], self.units[self.pos + 1]);
            self.pos += 2;
            Some(fragment)
        } else if codepoint >= 0 {
            // The decoded value, not the raw unit: malformed positions
            // yield the substituted U+FFFD here.
            self.pos += 1;
            Some(CodeUnits::single(codepoint as u16))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.pos;
        ((remaining + 1) / 2, Some(remaining))
    }
}

impl<'a> FusedIterator for Codepoints<'a> {}
