// File: src/c_api.rs
// C API for non-Rust hosts embedding the stemmer in their indexing pipeline.
// Handles are opaque caller-owned pointers; there is no process-global state.
// It uses catch_unwind so a panic can never cross the FFI boundary.
use crate::Stemmer;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

unsafe fn cstr_arg<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    CStr::from_ptr(ptr).to_str().unwrap_or("")
}

fn string_out(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Builds a stemmer from raw affix and dictionary text.
/// Returns null when the data is malformed. The caller owns the handle and
/// must release it with `czech_stemmer_free`.
#[no_mangle]
pub extern "C" fn czech_stemmer_new(
    affix_data: *const c_char,
    dictionary_data: *const c_char,
) -> *mut Stemmer {
    let result = catch_unwind(|| {
        let aff = unsafe { cstr_arg(affix_data) };
        let dic = unsafe { cstr_arg(dictionary_data) };
        match Stemmer::from_raw(aff, dic) {
            Ok(stemmer) => Box::into_raw(Box::new(stemmer)),
            Err(e) => {
                eprintln!("[Rust ERR] Failed to load stemmer data: {}", e);
                ptr::null_mut()
            }
        }
    });
    result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] A panic occurred while loading stemmer data.");
        ptr::null_mut()
    })
}

#[no_mangle]
pub extern "C" fn czech_stemmer_free(handle: *mut Stemmer) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Stems one word. Always returns a string (the input itself when nothing
/// validates); null only on a null handle or interior NUL. Free the result
/// with `czech_stemmer_free_string`.
#[no_mangle]
pub extern "C" fn czech_stemmer_stem(handle: *const Stemmer, word: *const c_char) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let stemmer = match unsafe { handle.as_ref() } {
            Some(s) => s,
            None => return ptr::null_mut(),
        };
        let word = unsafe { cstr_arg(word) };
        string_out(stemmer.stem(word))
    }));
    result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in czech_stemmer_stem.");
        ptr::null_mut()
    })
}

/// Diagnostic surface: every validated candidate for `word` as a JSON array
/// of `{"text": ..., "flags": [...]}` objects, in generation order.
#[no_mangle]
pub extern "C" fn czech_stemmer_analyze(
    handle: *const Stemmer,
    word: *const c_char,
) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let stemmer = match unsafe { handle.as_ref() } {
            Some(s) => s,
            None => return ptr::null_mut(),
        };
        let word = unsafe { cstr_arg(word) };
        let candidates = stemmer.analyze(word);
        let json = serde_json::to_string(&candidates).unwrap_or_else(|_| "[]".to_string());
        string_out(json)
    }));
    result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in czech_stemmer_analyze.");
        ptr::null_mut()
    })
}

#[no_mangle]
pub extern "C" fn czech_stemmer_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
