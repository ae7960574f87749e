//! Build script for the motor acoustics firmware
//!
//! Handles:
//! - Memory layout configuration
//! - Linker scripts for the embedded binary

fn main() {
    // Tell Cargo to re-run this if the linker script changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Link memory.x from project directory
    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        println!("cargo:rustc-link-search={dir}");
    }

    // Only the firmware binary links against cortex-m-rt and defmt; host
    // test builds keep the default linker setup
    #[cfg(feature = "embedded")]
    {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
