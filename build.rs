use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // Wi-Fi credentials and the ping target are compile-time configuration,
    // injected from the environment at build time.

    if let Ok(ssid) = env::var("WIFI_SSID") {
        println!("cargo:rustc-env=WIFI_SSID={}", ssid);
        println!("cargo:warning=Using WIFI_SSID from environment: {}", ssid);
    } else {
        println!("cargo:rustc-env=WIFI_SSID=");
    }

    if let Ok(password) = env::var("WIFI_PASSWORD") {
        println!("cargo:rustc-env=WIFI_PASSWORD={}", password);
        println!("cargo:warning=Using WIFI_PASSWORD from environment (hidden)");
    } else {
        println!("cargo:rustc-env=WIFI_PASSWORD=");
    }

    if let Ok(target) = env::var("PING_TARGET") {
        println!("cargo:rustc-env=PING_TARGET={}", target);
        println!("cargo:warning=Using PING_TARGET from environment: {}", target);
    } else {
        println!("cargo:rustc-env=PING_TARGET=142.251.35.196");
    }

    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");
    println!("cargo:rerun-if-env-changed=PING_TARGET");

    // RP2040 memory layout for firmware builds. Emitting the search path on
    // host builds is harmless; nothing references memory.x there.
    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not set"));
    File::create(out.join("memory.x"))
        .expect("create memory.x in OUT_DIR")
        .write_all(include_bytes!("memory.x"))
        .expect("write memory.x");
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
}
