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


mod defcode_format;
mod helper_constants;
mod helper_functions;
mod helper_types;
mod phone_format;
pub mod enums;
pub mod errors;
pub mod phone_formatter;

pub use defcode_format::DefcodeFormat;
pub use enums::{DefcodeDividers, MatchResult};
pub use helper_types::DefcodeMatch;
pub use phone_format::{Divider, PhoneFormat};

/// Opaque identifier of a country in the format catalog.
pub type CountryId = u32;
