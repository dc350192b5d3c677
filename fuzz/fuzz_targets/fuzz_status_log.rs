#![no_main]

use hresult_registry::{MAX_FIELD_OUTPUT_LEN, resolve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, String, String)| {
    let (code, interface, endpoint) = input;
    let Err(err) = resolve(code) else {
        return;
    };

    let err = err
        .with_metadata("interface", interface)
        .with_metadata("endpoint", endpoint);

    let mut text = String::new();
    let mut json = String::new();
    err.with_status_log(|log| {
        log.write_to(&mut text).unwrap();
        log.write_json_to(&mut json).unwrap();
    });

    assert!(text.len() <= 256 + 3 * (MAX_FIELD_OUTPUT_LEN + 16));
    assert!(json.starts_with('{') && json.ends_with('}'));
});
