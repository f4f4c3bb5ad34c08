//! Firmware support: copies `memory.x` to where the linker finds it and
//! records the build time as the initial wall-clock time.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Only the firmware links with the nRF52832 memory layout
    if env::var_os("CARGO_FEATURE_PINETIME").is_some() {
        File::create(out.join("memory.x"))
            .and_then(|mut f| f.write_all(include_bytes!("memory.x")))
            .expect("write memory.x");
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // UTC epoch of the build, the clock starts from there
    File::create(out.join("utc.rs"))
        .and_then(|mut f| {
            f.write_fmt(format_args!(
                "const UTC_TIME: i64 = {:?};",
                chrono::Utc::now().timestamp()
            ))
        })
        .expect("write utc.rs");
}
