// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use super::DefcodeDividers;

/// One variant of a regional sub-code ("defcode") following the calling code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefcodeFormat {
    /// The defcode must start with one of these prefixes. Empty means any.
    starts_with: Vec<String>,
    /// The defcode must not start with any of these prefixes.
    not_starts_with: Vec<String>,
    /// Number of digits in the defcode.
    length: usize,
    dividers: DefcodeDividers,
}

impl DefcodeFormat {
    pub(crate) fn new(
        starts_with: Vec<String>,
        not_starts_with: Vec<String>,
        length: usize,
        dividers: DefcodeDividers,
    ) -> Self {
        Self { starts_with, not_starts_with, length, dividers }
    }

    pub fn starts_with(&self) -> &[String] {
        &self.starts_with
    }

    pub fn not_starts_with(&self) -> &[String] {
        &self.not_starts_with
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn dividers(&self) -> DefcodeDividers {
        self.dividers
    }

    /// Checks the prefix rules against a defcode of at most `length` digits.
    ///
    /// An excluded prefix always rejects, even when an inclusion entry matches
    /// too. An incomplete defcode is accepted while it can still grow into one
    /// of the required prefixes.
    pub(crate) fn accepts(&self, defcode: &str) -> bool {
        if self.not_starts_with.iter().any(|prefix| defcode.starts_with(prefix.as_str())) {
            return false;
        }
        self.starts_with.is_empty()
            || self.starts_with.iter().any(|prefix| {
                defcode.starts_with(prefix.as_str())
                    || (defcode.len() < self.length && prefix.starts_with(defcode))
            })
    }

    /// Width of the rendered defcode segment, literals included.
    pub fn rendered_len(&self) -> usize {
        let (leading, trailing) = self.dividers.literals();
        leading.len() + self.length + trailing.len()
    }

    /// Returns the character expected at `position` of the defcode segment,
    /// given the `character` currently there. `None` means the current
    /// character has to go.
    pub(crate) fn char_at(&self, position: usize, character: char) -> Option<char> {
        let (leading, trailing) = self.dividers.literals();
        let digits_end = leading.len() + self.length;
        if position < leading.len() {
            leading.chars().nth(position)
        } else if position < digits_end {
            character.is_ascii_digit().then_some(character)
        } else {
            trailing.chars().nth(position - digits_end)
        }
    }
}
