use std::num::IntErrorKind;

use super::ApiError;
use crate::constants::messages::INVALID_PAGE;

/// Parses the `s` listing query parameter.
///
/// Absent or empty means page 1. Anything that is not a base-10 integer of
/// at least 1 is rejected. Numbers too large for `usize` are kept as
/// `usize::MAX` and clamp to the last page later.
pub fn validate_page(raw: Option<&str>) -> Result<usize, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(1);
    };

    let page = match raw.parse::<usize>() {
        Ok(page) => page,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => return Err(ApiError::validation(INVALID_PAGE)),
    };

    if page < 1 {
        return Err(ApiError::validation(INVALID_PAGE));
    }
    Ok(page)
}
