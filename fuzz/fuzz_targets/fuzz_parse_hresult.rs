#![no_main]

use hresult_registry::HResult;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    if let Ok(hr) = input.parse::<HResult>() {
        // Whatever parsed must survive its own Display form.
        assert_eq!(hr.to_string().parse::<HResult>().ok(), Some(hr));
        let _ = hr.ok();
    }
});
