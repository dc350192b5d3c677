#![no_main]

use hresult_registry::{from_code, resolve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 4]| {
    let code = u32::from_le_bytes(data);

    match (from_code(code), resolve(code)) {
        (None, Ok(())) => assert_eq!(code, 0),
        (Some(entry), Err(err)) => {
            assert_eq!(entry.code(), code);
            assert!(err.is(entry));
        }
        (None, Err(err)) => {
            assert!(!err.is_known());
            assert_eq!(err.code(), code);
        }
        (Some(_), Ok(())) => panic!("0x{:08X} is both an entry and success", code),
    }
});
