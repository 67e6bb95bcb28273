use thiserror::Error;

/// Validation failures raised while turning sheet text into itinerary items.
///
/// The tokenizer and the matrix interpreter never produce these; they
/// signal an unrecognized shape with empty output so the dispatcher can
/// fall back. Only the sheet reference resolver and the direct-row
/// interpreter fail loudly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("enter a public sheet link or a bare sheet id")]
    InvalidReference,

    #[error("sheet needs a header row and at least one data row")]
    InsufficientData,

    #[error("header must include date/time/title/location columns (日期/時間/標題/地點 also accepted)")]
    MissingColumns,

    #[error("no row had all of date/time/title/location filled in")]
    NoValidItems,
}
