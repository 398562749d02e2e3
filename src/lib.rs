mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod phoneformat;
mod text_watcher;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::CountryParsedListener;
pub use phoneformat::{
    CountryId, DefcodeDividers, DefcodeFormat, DefcodeMatch, Divider, MatchResult, PhoneFormat,
    errors::{CatalogError, InvalidEntryError},
    phone_formatter::PhoneFormatter,
};
pub use proto_gen::phone_formats;
pub use text_watcher::PhoneNumberFormattingWatcher;
