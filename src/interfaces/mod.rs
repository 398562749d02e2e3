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

/// Receives the outcome of every formatting pass run by
/// [`PhoneNumberFormattingWatcher`](crate::PhoneNumberFormattingWatcher).
pub trait CountryParsedListener {
    /// The edited number was resolved to `country_id`. `is_final` is set when
    /// the number is complete for that country.
    fn on_country_found(&mut self, country_id: CountryId, is_final: bool);

    /// No candidate country accepts the edited number.
    fn on_country_lost(&mut self);
}
