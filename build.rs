use std::env;

fn main() {
    // Firmware identification, baked in at compile time.
    // The build number doubles as the NVM config version stamp, so changing it
    // makes the next boot rewrite every persisted parameter with its default.

    // Firmware version
    if let Ok(version) = env::var("CNC_FIRMWARE_VERSION") {
        println!("cargo:rustc-env=CNC_FIRMWARE_VERSION={}", version);
        println!(
            "cargo:warning=Using CNC_FIRMWARE_VERSION from environment: {}",
            version
        );
    } else {
        println!("cargo:rustc-env=CNC_FIRMWARE_VERSION=0.93");
    }

    // Firmware build number
    if let Ok(build) = env::var("CNC_BUILD_NUMBER") {
        println!("cargo:rustc-env=CNC_BUILD_NUMBER={}", build);
        println!(
            "cargo:warning=Using CNC_BUILD_NUMBER from environment: {}",
            build
        );
    } else {
        println!("cargo:rustc-env=CNC_BUILD_NUMBER=331.02");
    }

    println!("cargo:rerun-if-env-changed=CNC_FIRMWARE_VERSION");
    println!("cargo:rerun-if-env-changed=CNC_BUILD_NUMBER");
}
