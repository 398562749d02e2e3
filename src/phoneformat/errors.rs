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


use thiserror::Error;

/// Raised while building a catalog. A failed catalog is never partially
/// usable: construction stops at the first invalid record.
#[derive(Debug, PartialEq, Error)]
pub enum CatalogError {
    #[error("Could not parse phone format catalog: {0}")]
    Parse(String),
    #[error("Phone format #{index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: InvalidEntryError,
    },
}

#[derive(Debug, PartialEq, Error)]
pub enum InvalidEntryError {
    #[error("Country code must not be empty")]
    EmptyCountryCode,
    #[error("Country code must contain only digits, got `{0}`")]
    NonDigitCountryCode(String),
    #[error("Number length must be positive, got {0}")]
    InvalidNumberLength(i32),
    #[error("Country ID should be set")]
    MissingCountryId,
    #[error("Divider must have a positive position, got {0}")]
    InvalidDividerPosition(i32),
    #[error("Divider cannot be empty")]
    EmptyDivider,
    #[error("Divider at position {position} overlaps the preceding one")]
    OverlappingDividers { position: usize },
    #[error("DEF code length must be positive, got {0}")]
    InvalidDefcodeLength(i32),
    #[error("Unknown DEF code dividers format: `{0}`")]
    UnknownDividerStyle(String),
}
