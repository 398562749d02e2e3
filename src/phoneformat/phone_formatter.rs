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


use log::{debug, trace, warn};

use super::{
    CountryId, DefcodeMatch, MatchResult, PhoneFormat,
    errors::CatalogError,
    helper_constants::CODE_PREFIX,
    helper_functions::{
        build_phone_formats, load_compiled_catalog, parse_binary_catalog, parse_text_catalog,
    },
    helper_types::CountryCodeMatch,
};
use crate::{
    proto_gen::phone_formats::PhoneFormatCollection,
    string_util::{extract_digits, replace_prefix},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Immutable catalog of phone formats together with the as-you-type
/// formatting entry points.
///
/// Build one at startup and share it by reference: every method takes
/// `&self`, so a single instance may serve any number of buffers, also
/// from different threads.
///
/// Wherever a method accepts `possible_countries`, an empty slice means
/// "any country of the catalog" and a single id switches to explicit
/// single-country mode.
#[derive(Debug, Clone)]
pub struct PhoneFormatter {
    /// Catalog entries in configuration order; the order breaks ties.
    phone_formats: Vec<PhoneFormat>,
}

impl PhoneFormatter {
    /// Creates a formatter for the catalog compiled into the library.
    pub fn new() -> Self {
        let formatter = load_compiled_catalog().and_then(Self::new_for_catalog);
        match formatter {
            Err(err) => {
                let err_message = format!("Could not parse compiled-in catalog: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(formatter) => formatter,
        }
    }

    /// Creates a formatter for an already decoded catalog.
    pub fn new_for_catalog(collection: PhoneFormatCollection) -> Result<Self> {
        let phone_formats = build_phone_formats(collection)?;
        debug!("Loaded {} phone formats", phone_formats.len());
        Ok(Self { phone_formats })
    }

    /// Creates a formatter for a catalog in protobuf text format.
    pub fn from_text_catalog(text: &str) -> Result<Self> {
        Self::new_for_catalog(parse_text_catalog(text)?)
    }

    /// Creates a formatter for a catalog in protobuf binary format.
    pub fn from_binary_catalog(bytes: &[u8]) -> Result<Self> {
        Self::new_for_catalog(parse_binary_catalog(bytes)?)
    }

    pub fn formats(&self) -> impl Iterator<Item = &PhoneFormat> {
        self.phone_formats.iter()
    }

    pub fn format_for_country(&self, country_id: CountryId) -> Option<&PhoneFormat> {
        self.phone_formats.iter().find(|format| format.country_id() == country_id)
    }

    pub fn supported_countries(&self) -> Vec<CountryId> {
        self.phone_formats.iter().map(PhoneFormat::country_id).collect()
    }

    fn candidates<'a>(
        &'a self,
        possible_countries: &[CountryId],
    ) -> impl Iterator<Item = &'a PhoneFormat> {
        self.phone_formats.iter().filter(move |format| {
            possible_countries.is_empty() || possible_countries.contains(&format.country_id())
        })
    }

    /// Checks whether the number is complete for one of the candidate
    /// countries. Formatting characters in `phone_number` are ignored.
    pub fn is_final(&self, phone_number: &str, possible_countries: &[CountryId]) -> bool {
        let digits = extract_digits(phone_number);
        self.candidates(possible_countries)
            .any(|format| format.validate(&digits) == MatchResult::Full)
    }

    /// Finds the format that fits the number best: a complete match first,
    /// then an overflowing one, then an incomplete one.
    ///
    /// With a single candidate that candidate's format is returned without
    /// looking at the number.
    pub fn lookup_format(
        &self,
        phone_number: &str,
        possible_countries: &[CountryId],
    ) -> Option<&PhoneFormat> {
        if phone_number.is_empty() {
            return None;
        }
        if let [country_id] = possible_countries {
            return self.format_for_country(*country_id);
        }
        let digits = extract_digits(phone_number);
        let results: Vec<(&PhoneFormat, MatchResult)> = self
            .candidates(possible_countries)
            .map(|format| (format, format.validate(&digits)))
            .collect();
        [MatchResult::Full, MatchResult::Long, MatchResult::Short]
            .into_iter()
            .find_map(|wanted| results.iter().find(|(_, result)| *result == wanted))
            .map(|(format, _)| *format)
    }

    /// Returns the calling code of the first candidate country using the
    /// given mobile country code.
    pub fn country_code_for_mcc(
        &self,
        mcc: &str,
        possible_countries: &[CountryId],
    ) -> Option<&str> {
        self.candidates(possible_countries)
            .find(|format| format.mcc().iter().any(|code| code == mcc))
            .map(PhoneFormat::country_code)
    }

    /// Formats the edited buffer in place and returns the country it was
    /// resolved to.
    ///
    /// With a single candidate the buffer is always formatted for it. With
    /// several candidates the countries are ranked by how their calling code
    /// matches; the first one able to continue the typed digits wins. When
    /// none can, the last character is dropped and the search repeats, so
    /// the buffer shrinks to the longest prefix that still fits some
    /// candidate. If no prefix fits, the buffer is emptied and `None` is
    /// returned.
    pub fn format(&self, input: &mut String, possible_countries: &[CountryId]) -> Option<CountryId> {
        if !input.starts_with(CODE_PREFIX) {
            self.substitute_trunk(input, possible_countries);
        }

        if let [country_id] = possible_countries {
            let Some(phone_format) = self.format_for_country(*country_id) else {
                warn!("Unknown country id provided: {}", country_id);
                return None;
            };
            return Some(Self::accept_digit(input, phone_format));
        }

        loop {
            let plain_phone = extract_digits(input).into_owned();
            if plain_phone.is_empty() {
                trace!("No candidate country accepts the input");
                input.clear();
                return None;
            }

            let mut possible_phone_formats: Vec<CountryCodeMatch> = self
                .candidates(possible_countries)
                .map(|format| CountryCodeMatch::new(format, &plain_phone))
                .collect();
            possible_phone_formats.sort_by_key(|candidate| candidate.result.preference_rank());

            match possible_phone_formats
                .into_iter()
                .find(|candidate| Self::check_formatting(candidate, &plain_phone))
            {
                Some(candidate) => return Some(Self::accept_digit(input, candidate.format)),
                None => Self::decline_digit(input),
            }
        }
    }

    /// Replaces a leading trunk prefix of an explicit candidate with its bare
    /// calling code. The first matching candidate in catalog order wins.
    fn substitute_trunk(&self, input: &mut String, possible_countries: &[CountryId]) {
        let substitution = self
            .phone_formats
            .iter()
            .filter(|format| possible_countries.contains(&format.country_id()))
            .find_map(|format| {
                format
                    .trunk()
                    .filter(|trunk| input.starts_with(*trunk))
                    .map(|trunk| (trunk, format.country_code()))
            });
        if let Some((trunk, country_code)) = substitution {
            trace!("Replacing trunk {} with calling code {}", trunk, country_code);
            replace_prefix(input, trunk, country_code);
        }
    }

    /// Checks whether the typed digits can still become a number of the
    /// candidate's country.
    fn check_formatting(candidate: &CountryCodeMatch, plain_phone: &str) -> bool {
        match candidate.result {
            MatchResult::Full => match candidate.format.best_defcode(plain_phone) {
                DefcodeMatch::Full(defcode) => matches!(
                    candidate.format.classify_full(plain_phone, defcode),
                    MatchResult::Full | MatchResult::Short
                ),
                DefcodeMatch::Short(_) => true,
                DefcodeMatch::NoViableVariant => false,
            },
            MatchResult::Short => true,
            MatchResult::Long | MatchResult::No => false,
        }
    }

    fn accept_digit(input: &mut String, phone_format: &PhoneFormat) -> CountryId {
        phone_format.rewrite(input);
        trace!("Formatted `{}` as {}", input, phone_format);
        phone_format.country_id()
    }

    fn decline_digit(input: &mut String) {
        if let Some(declined) = input.pop() {
            trace!("Declined `{}`, no candidate country accepts it", declined);
        }
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self::new()
    }
}
