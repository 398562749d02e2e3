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


use std::fmt;

use log::trace;

use super::{
    CountryId, DefcodeFormat, DefcodeMatch, MatchResult,
    helper_constants::{CODE_PREFIX, COUNTRY_CODE_START_POSITION, PLUS_SIGN},
};
use crate::string_util::{extract_digits, replace_prefix};

/// A literal inserted at a fixed offset of the rendered national number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divider {
    /// Offset inside the rendered national number, literals of preceding
    /// dividers included.
    position: usize,
    literal: String,
}

impl Divider {
    pub(crate) fn new(position: usize, literal: String) -> Self {
        Self { position, literal }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    fn end_position(&self) -> usize {
        self.position + self.literal.chars().count()
    }

    /// Returns the literal character covering `position`, if any.
    fn char_at(&self, position: usize) -> Option<char> {
        if self.position <= position && position < self.end_position() {
            self.literal.chars().nth(position - self.position)
        } else {
            None
        }
    }
}

/// Complete as-you-type format of one country.
///
/// The rendered layout is `+`, the calling code, the defcode segment of the
/// selected [`DefcodeFormat`] and the national number interleaved with
/// [`Divider`]s, e.g. `+7 907 123-45-67`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormat {
    country_id: CountryId,
    /// International calling code, digits only.
    country_code: String,
    /// Number of digits after the defcode.
    number_length: usize,
    /// Domestic prefix dialed instead of the calling code.
    trunk: Option<String>,
    defcode_variants: Vec<DefcodeFormat>,
    dividers: Vec<Divider>,
    mcc: Vec<String>,
}

impl PhoneFormat {
    pub(crate) fn new(
        country_id: CountryId,
        country_code: String,
        number_length: usize,
        trunk: Option<String>,
        defcode_variants: Vec<DefcodeFormat>,
        dividers: Vec<Divider>,
        mcc: Vec<String>,
    ) -> Self {
        Self { country_id, country_code, number_length, trunk, defcode_variants, dividers, mcc }
    }

    pub fn country_id(&self) -> CountryId {
        self.country_id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn number_length(&self) -> usize {
        self.number_length
    }

    pub fn trunk(&self) -> Option<&str> {
        self.trunk.as_deref()
    }

    pub fn defcode_variants(&self) -> &[DefcodeFormat] {
        &self.defcode_variants
    }

    pub fn dividers(&self) -> &[Divider] {
        &self.dividers
    }

    pub fn mcc(&self) -> &[String] {
        &self.mcc
    }

    /// Checks whether the digits agree with the calling code.
    ///
    /// Returns `Short` for a strict prefix of the code and `Full` once the
    /// digits start with the whole code. Empty input never matches.
    pub fn classify_country_code(&self, digits: &str) -> MatchResult {
        if digits.is_empty() {
            MatchResult::No
        } else if digits.len() < self.country_code.len() && self.country_code.starts_with(digits) {
            MatchResult::Short
        } else if digits.starts_with(self.country_code.as_str()) {
            MatchResult::Full
        } else {
            MatchResult::No
        }
    }

    /// Checks the digits following the calling code against one defcode
    /// variant. The calling code itself is assumed, not verified.
    ///
    /// An incomplete defcode is `Short` while it can still grow into one of
    /// the variant's `starts_with` prefixes, so a code like `15` can be typed
    /// one digit at a time. Strict prefix rules would answer `No` here.
    pub fn classify_defcode(&self, digits: &str, defcode_format: &DefcodeFormat) -> MatchResult {
        if digits.is_empty() || digits.len() < self.country_code.len() {
            return MatchResult::No;
        }
        let Some(rest) = digits.get(self.country_code.len()..) else {
            return MatchResult::No;
        };
        let defcode = rest.get(..rest.len().min(defcode_format.length())).unwrap_or(rest);
        if !defcode_format.accepts(defcode) {
            MatchResult::No
        } else if defcode.len() == defcode_format.length() {
            MatchResult::Full
        } else {
            MatchResult::Short
        }
    }

    /// Picks the defcode variant for the digits: first full match in catalog
    /// order, otherwise the first short one.
    pub fn best_defcode(&self, digits: &str) -> DefcodeMatch<'_> {
        let first_with = |wanted: MatchResult| {
            self.defcode_variants
                .iter()
                .find(|variant| self.classify_defcode(digits, variant) == wanted)
        };
        if let Some(variant) = first_with(MatchResult::Full) {
            return DefcodeMatch::Full(variant);
        }
        if let Some(variant) = first_with(MatchResult::Short) {
            return DefcodeMatch::Short(variant);
        }
        DefcodeMatch::NoViableVariant
    }

    /// Compares the digit count with the complete length of a number using
    /// the given defcode.
    pub fn classify_full(&self, digits: &str, defcode_format: &DefcodeFormat) -> MatchResult {
        let prefix_length = self.country_code.len() + defcode_format.length();
        let full_length = prefix_length + self.number_length;
        if digits.is_empty() || digits.len() < prefix_length {
            MatchResult::No
        } else if digits.len() < full_length {
            MatchResult::Short
        } else if digits.len() == full_length {
            MatchResult::Full
        } else {
            MatchResult::Long
        }
    }

    /// Validates a whole digit string (no formatting characters) against
    /// this format.
    pub fn validate(&self, digits: &str) -> MatchResult {
        if self.classify_country_code(digits) != MatchResult::Full {
            return MatchResult::No;
        }
        match self.best_defcode(digits) {
            DefcodeMatch::Full(defcode) => self.classify_full(digits, defcode),
            DefcodeMatch::Short(_) => MatchResult::Short,
            DefcodeMatch::NoViableVariant => MatchResult::No,
        }
    }

    fn defcode_start_position(&self) -> usize {
        COUNTRY_CODE_START_POSITION + self.country_code.len()
    }

    fn rendered_number_len(&self) -> usize {
        self.number_length + self.dividers.iter().map(|d| d.literal.chars().count()).sum::<usize>()
    }

    /// Returns the character belonging at `position` of the rendered number,
    /// given the `character` currently stored there. `None` means that the
    /// character has to be removed.
    pub(crate) fn char_at(
        &self,
        position: usize,
        character: char,
        defcode: Option<&DefcodeFormat>,
    ) -> Option<char> {
        let defcode_start = self.defcode_start_position();
        if position < COUNTRY_CODE_START_POSITION {
            return Some(CODE_PREFIX);
        }
        if position < defcode_start {
            return self.country_code.chars().nth(position - COUNTRY_CODE_START_POSITION);
        }
        let defcode = defcode?;
        let number_start = defcode_start + defcode.rendered_len();
        if position < number_start {
            defcode.char_at(position - defcode_start, character)
        } else if position < number_start + self.rendered_number_len() {
            self.number_char_at(position - number_start, character)
        } else {
            None
        }
    }

    fn number_char_at(&self, position: usize, character: char) -> Option<char> {
        if let Some(literal) = self.dividers.iter().find_map(|d| d.char_at(position)) {
            return Some(literal);
        }
        character.is_ascii_digit().then_some(character)
    }

    /// Rewrites the buffer in place into the canonical rendering of this
    /// format, keeping only as many characters as the typed digits fill.
    ///
    /// A leading trunk prefix is replaced with `+` and the calling code
    /// first. Applying the rewrite to its own output changes nothing.
    pub fn rewrite(&self, input: &mut String) {
        if let Some(trunk) = self.trunk.as_deref() {
            if !input.starts_with(CODE_PREFIX)
                && replace_prefix(input, trunk, &fast_cat::concat_str!(PLUS_SIGN, &self.country_code))
            {
                trace!("Replaced trunk {} with the calling code of {}", trunk, self);
            }
        }

        let defcode = {
            let digits = extract_digits(input);
            self.best_defcode(&digits).defcode()
        };

        let mut chars: Vec<char> = input.chars().collect();
        let mut position = 0;
        // Every step either advances `position` or shortens `chars`, and
        // `char_at` yields `None` past the rendered length, so this terminates.
        while position < chars.len() {
            let current = chars[position];
            match self.char_at(position, current, defcode) {
                Some(expected) if expected == current => position += 1,
                Some(expected) => {
                    if current.is_ascii_digit() {
                        chars.insert(position, expected);
                    } else {
                        chars[position] = expected;
                    }
                    position += 1;
                }
                None => {
                    chars.remove(position);
                }
            }
        }

        let formatted: String = chars.into_iter().collect();
        if *input != formatted {
            *input = formatted;
        }
    }
}

impl fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CODE_PREFIX, self.country_code)?;
        for variant in &self.defcode_variants {
            let not_starts_with: Vec<String> =
                variant.not_starts_with().iter().map(|prefix| format!("!{}", prefix)).collect();
            write!(f, "[{}][{}]", variant.starts_with().join("|"), not_starts_with.join("|"))?;
            f.write_str(&"D".repeat(variant.length()))?;
        }
        f.write_str(&"x".repeat(self.number_length))
    }
}
