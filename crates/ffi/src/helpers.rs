use crate::error::{with_last_error_mut, DefaultPodoError, PodoError, PodoErrorCode};
use std::ffi::CString;
use std::panic::{catch_unwind, UnwindSafe};

/// Set the thread-local error message and code.
/// Accepts any type implementing `PodoError` trait.
pub(crate) fn set_last_error(error: &impl PodoError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl PodoError) -> PodoErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = PodoErrorCode::Ok;
    });
}

/// Run `f`, translating its result (or a panic) into an error code and the
/// thread-local last-error state.
pub(crate) fn handle_ffi_result_error<F>(f: F) -> PodoErrorCode
where
    F: FnOnce() -> Result<(), DefaultPodoError> + UnwindSafe,
{
    match catch_unwind(f) {
        Ok(Ok(())) => {
            clear_last_error();
            PodoErrorCode::Ok
        }
        Ok(Err(error)) => track_error(&error),
        Err(_) => track_error(&DefaultPodoError::panicked()),
    }
}

/// Write `value` through `out` if it is non-null.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_optional<T>(out: *mut T, value: T) {
    if !out.is_null() {
        // SAFETY: caller guarantees a non-null `out` is valid for writes.
        unsafe { out.write(value) };
    }
}
