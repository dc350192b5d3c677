use hresult_registry::{HResult, StatusError, resolve};

fn activate(interface: &'static str, opnum: u16, status: u32) -> Result<(), StatusError> {
    resolve(status).map_err(|err| {
        err.with_metadata("interface", interface)
            .with_metadata("opnum", opnum.to_string())
            .with_metadata("endpoint", String::from("ncacn_ip_tcp:10.0.0.7[49667]"))
    })
}

fn main() {
    println!("--- Status Logging Example ---\n");

    let failures = [
        activate("IRemoteSCMActivator", 4, 0x8001_011F),
        activate("IObjectExporter", 5, HResult::from_win32(1722).value()),
    ];

    for result in failures {
        let Err(err) = result else { continue };

        // 1. What an operator sees in a one-line text log.
        err.with_status_log(|log| {
            let mut line = String::new();
            if log.write_to(&mut line).is_ok() {
                println!("[TEXT] {}", line);
            }
        });

        // 2. What a log shipper ingests.
        err.with_status_log(|log| {
            let mut line = String::new();
            if log.write_json_to(&mut line).is_ok() {
                println!("[JSON] {}", line);
            }
        });

        // 3. Debug output never shows metadata values.
        println!("[DEBUG] {:?}\n", err);
    }

    // Metadata is zeroized here as each error drops.
}
