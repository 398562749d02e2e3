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


use std::str::FromStr;

use protobuf::Message;

use super::{
    DefcodeDividers, DefcodeFormat, Divider, PhoneFormat,
    errors::{CatalogError, InvalidEntryError},
    helper_constants::BUILTIN_CATALOG,
};
use crate::proto_gen::phone_formats::{self as proto, PhoneFormatCollection};

/// Loads the catalog compiled into the library.
pub(super) fn load_compiled_catalog() -> Result<PhoneFormatCollection, CatalogError> {
    parse_text_catalog(BUILTIN_CATALOG)
}

/// Parses a catalog written in protobuf text format.
pub(super) fn parse_text_catalog(text: &str) -> Result<PhoneFormatCollection, CatalogError> {
    protobuf::text_format::parse_from_str::<PhoneFormatCollection>(text)
        .map_err(|err| CatalogError::Parse(err.to_string()))
}

/// Parses a catalog serialized in protobuf binary format.
pub(super) fn parse_binary_catalog(bytes: &[u8]) -> Result<PhoneFormatCollection, CatalogError> {
    PhoneFormatCollection::parse_from_bytes(bytes)
        .map_err(|err| CatalogError::Parse(err.to_string()))
}

/// Converts every catalog record, stopping at the first invalid one.
pub(super) fn build_phone_formats(
    collection: PhoneFormatCollection,
) -> Result<Vec<PhoneFormat>, CatalogError> {
    collection
        .phone
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            convert_phone_format(entry).map_err(|source| CatalogError::InvalidEntry { index, source })
        })
        .collect()
}

fn convert_phone_format(mut entry: proto::PhoneFormat) -> Result<PhoneFormat, InvalidEntryError> {
    let country_code = entry.country_code.take().unwrap_or_default();
    if country_code.is_empty() {
        return Err(InvalidEntryError::EmptyCountryCode);
    }
    if !country_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidEntryError::NonDigitCountryCode(country_code));
    }
    let number_length = positive(entry.maxlength())
        .ok_or(InvalidEntryError::InvalidNumberLength(entry.maxlength()))?;
    let country_id = entry.country();
    if country_id == 0 {
        return Err(InvalidEntryError::MissingCountryId);
    }
    let trunk = entry.trunk.take().filter(|trunk| !trunk.is_empty());

    let dividers = convert_dividers(std::mem::take(&mut entry.split))?;
    let defcode_variants = std::mem::take(&mut entry.defcode_format)
        .into_iter()
        .map(convert_defcode_format)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PhoneFormat::new(
        country_id,
        country_code,
        number_length,
        trunk,
        defcode_variants,
        dividers,
        std::mem::take(&mut entry.mcc),
    ))
}

fn convert_defcode_format(
    mut entry: proto::DefcodeFormat,
) -> Result<DefcodeFormat, InvalidEntryError> {
    let length = positive(entry.length())
        .ok_or(InvalidEntryError::InvalidDefcodeLength(entry.length()))?;
    let dividers = DefcodeDividers::from_str(entry.formatting())
        .map_err(|_| InvalidEntryError::UnknownDividerStyle(entry.formatting().to_owned()))?;
    Ok(DefcodeFormat::new(
        std::mem::take(&mut entry.starts_with),
        std::mem::take(&mut entry.not_starts_with),
        length,
        dividers,
    ))
}

/// Converts the splits of one record, rejecting literals that would be
/// rendered on top of each other.
fn convert_dividers(splits: Vec<proto::Split>) -> Result<Vec<Divider>, InvalidEntryError> {
    let mut dividers = Vec::with_capacity(splits.len());
    for mut split in splits {
        let position = positive(split.position())
            .ok_or(InvalidEntryError::InvalidDividerPosition(split.position()))?;
        let literal = split.letter.take().unwrap_or_default();
        if literal.is_empty() {
            return Err(InvalidEntryError::EmptyDivider);
        }
        dividers.push(Divider::new(position, literal));
    }

    let mut ordered: Vec<&Divider> = dividers.iter().collect();
    ordered.sort_by_key(|divider| divider.position());
    for pair in ordered.windows(2) {
        if pair[1].position() < pair[0].position() + pair[0].literal().chars().count() {
            return Err(InvalidEntryError::OverlappingDividers { position: pair[1].position() });
        }
    }
    Ok(dividers)
}

fn positive(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|value| *value > 0)
}
