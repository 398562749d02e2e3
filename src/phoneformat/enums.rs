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


use strum::{EnumIter, EnumString, IntoStaticStr};

/// Describes how far a digit sequence fits a phone format, or one segment
/// of it (calling code, defcode or the whole number).
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// **No match.**
    /// The digits contradict the format.
    No,
    /// **Incomplete match.**
    /// The digits are a valid strict prefix of a complete number.
    Short,
    /// **Exact match.**
    /// The digits form a complete number.
    Full,
    /// **Overflow.**
    /// The digits exceed the expected length while the prefix stayed valid.
    Long,
}

impl MatchResult {
    /// Order in which candidate countries are tried: a full calling code
    /// first, then long, short and finally no match.
    pub(crate) fn preference_rank(self) -> u8 {
        match self {
            MatchResult::Full => 0,
            MatchResult::Long => 1,
            MatchResult::Short => 2,
            MatchResult::No => 3,
        }
    }
}

/// Literals placed around a defcode.
///
/// The catalog spells these as `space`, `brackets` and `dashRight`.
#[derive(Debug, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefcodeDividers {
    /// `+7 907 123`
    #[strum(serialize = "space")]
    Space,
    /// `+1 (212) 555`
    #[strum(serialize = "brackets")]
    Brackets,
    /// `+44 7911-123`
    #[strum(serialize = "dashRight")]
    RightDash,
}

impl DefcodeDividers {
    /// Returns the leading and trailing literal of the defcode segment.
    pub fn literals(self) -> (&'static str, &'static str) {
        match self {
            DefcodeDividers::Space => (" ", " "),
            DefcodeDividers::Brackets => (" (", ") "),
            DefcodeDividers::RightDash => (" ", "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::{DefcodeDividers, MatchResult};

    #[test]
    fn divider_tokens() {
        assert_eq!(DefcodeDividers::from_str("space"), Ok(DefcodeDividers::Space));
        assert_eq!(DefcodeDividers::from_str("brackets"), Ok(DefcodeDividers::Brackets));
        assert_eq!(DefcodeDividers::from_str("dashRight"), Ok(DefcodeDividers::RightDash));
        assert!(DefcodeDividers::from_str("dashLeft").is_err());
        assert!(DefcodeDividers::from_str("Space").is_err());

        for dividers in DefcodeDividers::iter() {
            let token: &'static str = dividers.into();
            assert_eq!(DefcodeDividers::from_str(token), Ok(dividers));
        }
    }

    #[test]
    fn preference_order() {
        let mut results: Vec<MatchResult> = MatchResult::iter().collect();
        results.sort_by_key(|r| r.preference_rank());
        assert_eq!(
            results,
            vec![MatchResult::Full, MatchResult::Long, MatchResult::Short, MatchResult::No]
        );
    }
}
