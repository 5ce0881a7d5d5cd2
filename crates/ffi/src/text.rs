use physkit_core::{uniquefier_number_format, unit_decorated_decimal_format};
use std::os::raw::c_char;

use crate::error::{DefaultPhysKitError, PhysKitErrorCode};
use crate::helpers::{str_from_ptr, track_error, track_result, write_c_string};

/// Formats `value` with a decimal pattern, appending `unit` when it is
/// non-null and not blank.
///
/// Returns `InvalidArgument` for a malformed pattern.
///
/// # Safety
/// - `pattern` must be a NUL-terminated string.
/// - `unit` must be null or a NUL-terminated string.
/// - `out_buffer` must point to at least `capacity` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn physkit_format_decimal(
    value: f64,
    pattern: *const c_char,
    unit: *const c_char,
    out_buffer: *mut c_char,
    capacity: usize,
) -> PhysKitErrorCode {
    let pattern = match track_result(unsafe { str_from_ptr(pattern, "pattern") }) {
        Ok(Some(pattern)) => pattern,
        Ok(None) => return track_error(&DefaultPhysKitError::null_pointer("pattern")),
        Err(code) => return code,
    };

    let formatted = unsafe { str_from_ptr(unit, "unit") }.and_then(|unit| {
        unit_decorated_decimal_format(pattern, unit)
            .map(|format| format.format(value))
            .map_err(DefaultPhysKitError::from)
    });
    let written = formatted.and_then(|text| unsafe { write_c_string(&text, out_buffer, capacity) });
    match track_result(written) {
        Ok(()) => PhysKitErrorCode::Ok,
        Err(code) => code,
    }
}

/// Writes the uniquefier suffix for `index`, e.g. `7` becomes `"_007"`.
///
/// # Safety
/// `out_buffer` must point to at least `capacity` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn physkit_format_uniquefier(
    index: u32,
    out_buffer: *mut c_char,
    capacity: usize,
) -> PhysKitErrorCode {
    let text = uniquefier_number_format().format(f64::from(index));
    match track_result(unsafe { write_c_string(&text, out_buffer, capacity) }) {
        Ok(()) => PhysKitErrorCode::Ok,
        Err(code) => code,
    }
}
