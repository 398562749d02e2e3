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


use log::trace;

use crate::{CountryId, CountryParsedListener, PhoneFormatter};

/// Adapts [`PhoneFormatter`] to an editable text field: call
/// [`on_edit`](Self::on_edit) after every change of the text.
///
/// The watcher borrows the formatter, so one formatter may back any number
/// of fields. `on_edit` takes `&mut self`, which rules out a second
/// formatting pass starting while one is in flight.
pub struct PhoneNumberFormattingWatcher<'a> {
    phone_formatter: &'a PhoneFormatter,
    possible_countries: Vec<CountryId>,
    listener: Option<Box<dyn CountryParsedListener + 'a>>,
}

impl<'a> PhoneNumberFormattingWatcher<'a> {
    pub fn new(phone_formatter: &'a PhoneFormatter, possible_countries: Vec<CountryId>) -> Self {
        Self { phone_formatter, possible_countries, listener: None }
    }

    pub fn set_on_country_parsed_listener(&mut self, listener: impl CountryParsedListener + 'a) {
        self.listener = Some(Box::new(listener));
    }

    pub fn possible_countries(&self) -> &[CountryId] {
        &self.possible_countries
    }

    /// Formats the edited text in place and reports the outcome to the
    /// listener, if one is set.
    pub fn on_edit(&mut self, text: &mut String) -> Option<CountryId> {
        let country_id = self.phone_formatter.format(text, &self.possible_countries);
        trace!("Edited text `{}` resolved to {:?}", text, country_id);
        if let Some(listener) = self.listener.as_mut() {
            match country_id {
                Some(country_id) => {
                    let is_final = self.phone_formatter.is_final(text, &[country_id]);
                    listener.on_country_found(country_id, is_final);
                }
                None => listener.on_country_lost(),
            }
        }
        country_id
    }

    /// Checks whether `value` is a complete number of the only configured
    /// country. Always `false` when several countries are configured.
    pub fn is_possible_match(&self, value: &str) -> bool {
        let [expected_country] = self.possible_countries.as_slice() else {
            return false;
        };
        let mut formatted = value.to_owned();
        let country_id = self.phone_formatter.format(&mut formatted, &self.possible_countries);
        country_id == Some(*expected_country)
            && self.phone_formatter.is_final(&formatted, &self.possible_countries)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::PhoneNumberFormattingWatcher;
    use crate::{CountryId, CountryParsedListener, PhoneFormatter, i18n::Country};

    #[derive(Debug, PartialEq)]
    enum Event {
        Found(CountryId, bool),
        Lost,
    }

    struct RecordingListener(Rc<RefCell<Vec<Event>>>);

    impl CountryParsedListener for RecordingListener {
        fn on_country_found(&mut self, country_id: CountryId, is_final: bool) {
            self.0.borrow_mut().push(Event::Found(country_id, is_final));
        }

        fn on_country_lost(&mut self) {
            self.0.borrow_mut().push(Event::Lost);
        }
    }

    #[test]
    fn reports_found_and_lost_countries() {
        let formatter = PhoneFormatter::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut watcher =
            PhoneNumberFormattingWatcher::new(&formatter, vec![Country::ru(), Country::ua()]);
        watcher.set_on_country_parsed_listener(RecordingListener(events.clone()));

        let mut text = "7907".to_owned();
        assert_eq!(watcher.on_edit(&mut text), Some(Country::ru()));
        assert_eq!(text, "+7 907");

        text.push_str("1234567");
        assert_eq!(watcher.on_edit(&mut text), Some(Country::ru()));
        assert_eq!(text, "+7 907 123-45-67");

        let mut text = "5".to_owned();
        assert_eq!(watcher.on_edit(&mut text), None);
        assert_eq!(text, "");

        assert_eq!(
            *events.borrow(),
            vec![Event::Found(Country::ru(), false), Event::Found(Country::ru(), true), Event::Lost]
        );
    }

    #[test]
    fn works_without_listener() {
        let formatter = PhoneFormatter::new();
        let mut watcher = PhoneNumberFormattingWatcher::new(&formatter, vec![Country::ua()]);
        let mut text = "380123456789".to_owned();
        assert_eq!(watcher.on_edit(&mut text), Some(Country::ua()));
        assert_eq!(text, "+380 12 345 6789");
        assert_eq!(watcher.possible_countries(), &[Country::ua()]);
    }

    #[test]
    fn possible_match_requires_single_complete_country() {
        let formatter = PhoneFormatter::new();

        let single = PhoneNumberFormattingWatcher::new(&formatter, vec![Country::ru()]);
        assert!(single.is_possible_match("79071234567"));
        assert!(single.is_possible_match("89071234567"));
        assert!(single.is_possible_match("+7 907 123-45-67"));
        assert!(!single.is_possible_match("7907"));
        assert!(!single.is_possible_match(""));

        let several = PhoneNumberFormattingWatcher::new(&formatter, vec![Country::ru(), Country::ua()]);
        assert!(!several.is_possible_match("79071234567"));

        let any = PhoneNumberFormattingWatcher::new(&formatter, vec![]);
        assert!(!any.is_possible_match("79071234567"));
    }
}
