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


use super::{DefcodeFormat, MatchResult, PhoneFormat};

/// Outcome of searching the defcode variants of one format.
///
/// Variants are scanned in catalog order: the first full match wins, then
/// the first short one. `NoViableVariant` means that no variant can be
/// continued into a valid number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefcodeMatch<'a> {
    Full(&'a DefcodeFormat),
    Short(&'a DefcodeFormat),
    NoViableVariant,
}

impl<'a> DefcodeMatch<'a> {
    pub fn defcode(&self) -> Option<&'a DefcodeFormat> {
        match self {
            DefcodeMatch::Full(defcode) | DefcodeMatch::Short(defcode) => Some(defcode),
            DefcodeMatch::NoViableVariant => None,
        }
    }

    pub fn result(&self) -> MatchResult {
        match self {
            DefcodeMatch::Full(_) => MatchResult::Full,
            DefcodeMatch::Short(_) => MatchResult::Short,
            DefcodeMatch::NoViableVariant => MatchResult::No,
        }
    }
}

/// A catalog entry paired with how the typed digits match its calling code.
#[derive(Debug, Clone, Copy)]
pub(super) struct CountryCodeMatch<'a> {
    pub format: &'a PhoneFormat,
    pub result: MatchResult,
}

impl<'a> CountryCodeMatch<'a> {
    pub fn new(format: &'a PhoneFormat, digits: &str) -> Self {
        Self { format, result: format.classify_country_code(digits) }
    }
}
