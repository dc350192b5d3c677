use hresult_registry::{HResult, Result, StatusKind, from_code, lookup_name, resolve};

/// Status fields as they might arrive in DCE/RPC fault PDUs.
const OBSERVED: [u32; 6] = [0x0000_0000, 0x8000_4005, 0x8007_0057, 0x8001_0108, 0x8007_06BA, 0xFFFF_FFFF];

fn call_remote(status: u32) -> Result<()> {
    // A real decoder would pull this out of the fault PDU body.
    resolve(status)?;
    Ok(())
}

fn main() {
    println!("--- Resolving Status Codes ---\n");

    for status in OBSERVED {
        match call_remote(status) {
            Ok(()) => println!("0x{:08X}  success", status),
            Err(err) => match err.kind() {
                StatusKind::Known(entry) => {
                    println!("0x{:08X}  {} [{}]", status, entry.name(), entry.facility());
                    println!("            {}", entry.description());
                }
                StatusKind::Unknown(hr) => {
                    println!("0x{:08X}  not in catalog ({}, {})", status, hr.facility(), hr.severity());
                }
            },
        }
    }

    println!("\n--- Legacy Lookup ---\n");
    // from_code cannot tell success apart from an unknown code.
    for status in [0, 0xFFFF_FFFF] {
        println!("from_code(0x{:08X}) = {:?}", status, from_code(status).map(|e| e.name()));
    }

    println!("\n--- Win32 Errors ---\n");
    // ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER
    for win32 in [5, 87] {
        let hr = HResult::from_win32(win32);
        println!("{:>4} -> {} {:?}", win32, hr, hr.entry().map(|e| e.name()));
    }

    println!("\n--- Name Lookup ---\n");
    for name in ["RPC_E_TIMEOUT", "CO_E_FIRST", "NOT_A_CODE"] {
        match lookup_name(name) {
            Some(entry) => println!("{:<20} {}", name, entry),
            None => println!("{:<20} no such entry", name),
        }
    }
}
