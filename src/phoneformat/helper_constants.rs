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


/// Every rendered number starts with this character.
pub const CODE_PREFIX: char = '+';
pub const PLUS_SIGN: &str = "+";

/// The calling code starts right after the plus sign.
pub const COUNTRY_CODE_START_POSITION: usize = 1;

/// Catalog compiled into the library, in protobuf text format.
pub const BUILTIN_CATALOG: &str = include_str!("../../resources/phone_formats.textproto");
