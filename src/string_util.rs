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


use std::borrow::Cow;

/// Keeps only ASCII digits of the given text.
///
/// Returns `Cow::Borrowed` if the text is already digits only, so the
/// common case of an unformatted number does not allocate.
pub fn extract_digits(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(char::is_ascii_digit).collect())
    }
}

/// Replaces `prefix` at the start of `text` with `replacement`. Returns
/// `true` if the prefix was found and replaced.
pub fn replace_prefix(text: &mut String, prefix: &str, replacement: &str) -> bool {
    if prefix.is_empty() || !text.starts_with(prefix) {
        return false;
    }
    text.replace_range(..prefix.len(), replacement);
    true
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{extract_digits, replace_prefix};

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("79071234567"), Cow::Borrowed("79071234567"));
        assert!(matches!(extract_digits("79071234567"), Cow::Borrowed(_)));
        assert_eq!(extract_digits("+7 907 123-45-67"), Cow::<str>::Owned("79071234567".to_owned()));
        assert_eq!(extract_digits("7907ddd1"), "79071");
        assert_eq!(extract_digits("+ ()-"), "");
    }

    #[test]
    fn test_replace_prefix() {
        let mut text = "89071234567".to_owned();
        assert!(replace_prefix(&mut text, "8", "+7"));
        assert_eq!(text, "+79071234567");

        let mut text = "79071234567".to_owned();
        assert!(!replace_prefix(&mut text, "8", "+7"));
        assert_eq!(text, "79071234567");

        assert!(!replace_prefix(&mut text, "", "+7"));
        assert_eq!(text, "79071234567");
    }
}
