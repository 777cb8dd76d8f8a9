#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(result) = biogov::quiz::assess_json(&value) {
            assert!(!result.checklist.is_empty());
        }
    }
});
