pub mod csv;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod shared;
pub mod sheet;

// Re-export commonly used items
pub use error::SheetError;
pub use sheet::{build_csv_url, parse_sheet_input, SheetReference};

use crate::models::ItineraryItem;

/// Convert raw sheet CSV text into itinerary items.
///
/// Tokenizes once, then tries the direct one-row-per-event shape; if that
/// fails, falls back to the day-column matrix shape. The direct-format
/// diagnostic is the one surfaced when the fallback also finds nothing,
/// since it names concrete columns and is the actionable message for the
/// user.
///
/// # Errors
///
/// Returns the direct interpreter's [`SheetError`] when neither shape
/// yields any items.
pub fn to_itinerary_items(csv_text: &str) -> Result<Vec<ItineraryItem>, SheetError> {
    let rows = csv::parse_csv(csv_text);

    match direct::parse_direct_rows(&rows) {
        Ok(items) => Ok(items),
        Err(direct_error) => {
            let matrix_items = matrix::parse_matrix_rows(&rows);
            if matrix_items.is_empty() {
                Err(direct_error)
            } else {
                Ok(matrix_items)
            }
        }
    }
}
