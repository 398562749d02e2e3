use crate::CountryId;

pub const EXCLUSIVE: CountryId = 1;
pub const OPEN: CountryId = 2;
pub const NO_DEFCODE: CountryId = 3;

/// A catalog with made-up countries covering rules the compiled-in one does
/// not use: conflicting prefix rules, multi-digit trunks and formats without
/// defcode variants.
pub const TEST_CATALOG: &str = r#"
phone {
  country: 1
  country_code: "9"
  maxlength: 4
  trunk: "00"
  defcode_format {
    length: 2
    formatting: "space"
    starts_with: "9"
    not_starts_with: "90"
  }
  defcode_format {
    length: 3
    formatting: "dashRight"
  }
  split { position: 2 letter: "/" }
  mcc: "901"
}
phone {
  country: 2
  country_code: "98"
  maxlength: 3
  defcode_format {
    length: 1
    formatting: "brackets"
  }
  mcc: "901"
  mcc: "902"
}
phone {
  country: 3
  country_code: "97"
  maxlength: 5
}
"#;
