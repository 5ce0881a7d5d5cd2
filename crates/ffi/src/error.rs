use physkit_core::ToolkitError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - the error code passed across the FFI boundary
/// - `msg()` - the diagnostic message kept in thread-local storage
pub(crate) trait PhysKitError {
    fn code(&self) -> PhysKitErrorCode;

    fn msg(&self) -> &str;
}

/// Default implementation of `PhysKitError` for common FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPhysKitError {
    code: PhysKitErrorCode,
    msg: String,
}

impl DefaultPhysKitError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: PhysKitErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: PhysKitErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for a C string argument that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: PhysKitErrorCode::InvalidArgument,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self {
            code: PhysKitErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {capacity} bytes, {required} required"),
        }
    }
}

impl From<ToolkitError> for DefaultPhysKitError {
    fn from(error: ToolkitError) -> Self {
        let code = match error {
            ToolkitError::InvalidArgument(_) => PhysKitErrorCode::InvalidArgument,
            ToolkitError::UnexpectedVariant { .. } => PhysKitErrorCode::UnexpectedVariant,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl PhysKitError for DefaultPhysKitError {
    fn code(&self) -> PhysKitErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by toolkit functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysKitErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// Text did not name a value, or a string argument was not UTF-8.
    InvalidArgument = 3,

    /// An ordinal did not correspond to any declared unit.
    UnexpectedVariant = 4,

    /// Output buffer too small for the NUL-terminated result.
    BufferTooSmall = 5,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed out by `physkit_get_last_error` stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, PhysKitErrorCode)> = const { RefCell::new((None, PhysKitErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, PhysKitErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, PhysKitErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that
/// sets or clears the error.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// double kelvin = 0.0;
/// if (physkit_environment_get_temperature(env, 7, &kelvin) != PhysKitErrorCode::Ok) {
///     printf("lookup failed: %s\n", physkit_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn physkit_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `PhysKitErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn physkit_get_last_error_code() -> PhysKitErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
