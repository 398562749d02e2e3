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


use crate::CountryId;

/// Ids of the countries shipped in the compiled-in catalog.
///
/// The ids are ISO 3166-1 numeric codes, but the formatter treats them as
/// opaque values: a custom catalog may use any non-zero numbering.
pub struct Country {
}

impl Country {
    pub fn by() -> CountryId {
        112
    }

    pub fn de() -> CountryId {
        276
    }

    pub fn gb() -> CountryId {
        826
    }

    pub fn kz() -> CountryId {
        398
    }

    pub fn ru() -> CountryId {
        643
    }

    pub fn ua() -> CountryId {
        804
    }

    pub fn us() -> CountryId {
        840
    }

    /// Returns an id that no shipped catalog entry uses.
    pub fn unknown() -> CountryId {
        999
    }
}
