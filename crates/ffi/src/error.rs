use podostemum_core::DomainError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// allowing both simple error codes and custom error messages.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait PodoError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> PodoErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `PodoError` for FFI failures.
///
/// Wraps a `PodoErrorCode` with a message; domain failures from the model
/// convert into it with `From`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultPodoError {
    code: PodoErrorCode,
    msg: String,
}

impl DefaultPodoError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_par"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: PodoErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a panic caught at the boundary.
    pub fn panicked() -> Self {
        Self {
            code: PodoErrorCode::Panic,
            msg: "internal panic while evaluating the model".to_string(),
        }
    }
}

impl From<DomainError> for DefaultPodoError {
    fn from(error: DomainError) -> Self {
        let code = match error {
            DomainError::Negative { .. } => PodoErrorCode::Negative,
            DomainError::NotPositive { .. } => PodoErrorCode::NotPositive,
            DomainError::OutOfRange { .. } => PodoErrorCode::OutOfRange,
            DomainError::NotFinite { .. } => PodoErrorCode::NotFinite,
            DomainError::LiveExceedsTotal { .. } => PodoErrorCode::LiveExceedsTotal,
            DomainError::PolarDaylength { .. } => PodoErrorCode::PolarDaylength,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl PodoError for DefaultPodoError {
    fn code(&self) -> PodoErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by model functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodoErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A quantity that must be non-negative was negative.
    Negative = 2,

    /// A divisor (glucose requirement, carrying capacity) was zero.
    NotPositive = 3,

    /// A bounded quantity (latitude, reflectance, daylength) was out of range.
    OutOfRange = 4,

    /// NaN or infinity passed as input.
    NotFinite = 5,

    /// Live tissue weight exceeded total tissue weight.
    LiveExceedsTotal = 6,

    /// Polar day or night under the reject policy.
    PolarDaylength = 7,

    /// The model panicked; this is a bug.
    Panic = 8,
}

impl From<DefaultPodoError> for PodoErrorCode {
    fn from(error: DefaultPodoError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, PodoErrorCode)> = const { RefCell::new((None, PodoErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, PodoErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, PodoErrorCode)) -> R,
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
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// PodoParProfile par;
/// uint32_t warnings = 0;
/// if (podo_surface_par(120.0, 25.0, PodoPolarPolicy_Clamp, &par, &warnings) != PodoErrorCode_Ok) {
///     printf("surface PAR failed: %s\n", podo_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn podo_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` after a successful call).
#[no_mangle]
pub extern "C" fn podo_last_error_code() -> PodoErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
