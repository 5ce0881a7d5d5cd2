use crate::error::{with_last_error_mut, DefaultPhysKitError, PhysKitError, PhysKitErrorCode};
use crate::environment::PhysKitEnvironment;
use physkit_core::NaturalEnvironment;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use tracing::debug;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl PhysKitError) {
    debug!(code = ?error.code(), "ffi error: {}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl PhysKitError) -> PhysKitErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result, or clear the last error on success.
pub(crate) fn track_result<T, E>(result: Result<T, E>) -> Result<T, PhysKitErrorCode>
where
    E: Into<DefaultPhysKitError>,
{
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error.into())),
    }
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = PhysKitErrorCode::Ok;
    });
}

/// Borrow a caller-supplied C string as UTF-8.
///
/// A null pointer maps to `None`, matching the absent-text convention of the
/// core parsers.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string that stays valid
/// for `'a`.
pub(crate) unsafe fn str_from_ptr<'a>(
    text: *const c_char,
    param_name: &str,
) -> Result<Option<&'a str>, DefaultPhysKitError> {
    if text.is_null() {
        return Ok(None);
    }
    unsafe { CStr::from_ptr(text) }
        .to_str()
        .map(Some)
        .map_err(|_| DefaultPhysKitError::invalid_utf8(param_name))
}

/// Copy `text` into a caller-owned buffer with a trailing NUL.
///
/// # Safety
/// `out` must point to at least `capacity` writable bytes.
pub(crate) unsafe fn write_c_string(
    text: &str,
    out: *mut c_char,
    capacity: usize,
) -> Result<(), DefaultPhysKitError> {
    if out.is_null() {
        return Err(DefaultPhysKitError::null_pointer("out_buffer"));
    }
    let bytes = text.as_bytes();
    let required = bytes.len() + 1;
    if required > capacity {
        return Err(DefaultPhysKitError::buffer_too_small(required, capacity));
    }
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), out.cast::<u8>(), bytes.len());
        *out.add(bytes.len()) = 0;
    }
    Ok(())
}

/// Run `func` against the environment behind `ptr` while holding its lock.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `physkit_environment_new`.
pub(crate) unsafe fn with_environment<F, T>(
    ptr: *const PhysKitEnvironment,
    func: F,
) -> Result<T, DefaultPhysKitError>
where
    F: FnOnce(&mut NaturalEnvironment) -> T,
{
    let Some(instance) = (unsafe { ptr.as_ref() }) else {
        return Err(DefaultPhysKitError::null_pointer("env"));
    };
    let mut env = instance
        .env
        .lock()
        .map_err(|_| DefaultPhysKitError::lock_poisoned("Mutex"))?;
    Ok(func(&mut env))
}
