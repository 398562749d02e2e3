mod test_catalog;

use crate::PhoneFormatter;

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

/// Formatter backed by the compiled-in catalog.
fn get_phone_formatter() -> PhoneFormatter {
    init_logging();
    PhoneFormatter::new()
}

/// Formatter backed by the catalog in `test_catalog`.
fn get_test_phone_formatter() -> PhoneFormatter {
    init_logging();
    PhoneFormatter::from_text_catalog(test_catalog::TEST_CATALOG)
        .expect("Test catalog should be valid")
}
