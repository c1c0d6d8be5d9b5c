use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed=wifi_config.h");

    // Read WiFi configuration if it exists
    let wifi_config_path = "wifi_config.h";
    if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;

        println!("cargo:rustc-env=WIFI_SSID={}", header_define(&contents, "WIFI_SSID"));
        println!("cargo:rustc-env=WIFI_PASSWORD={}", header_define(&contents, "WIFI_PASSWORD"));
    } else {
        // Use empty defaults if no config file
        println!("cargo:rustc-env=WIFI_SSID=");
        println!("cargo:rustc-env=WIFI_PASSWORD=");
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
    }

    Ok(())
}

// Value of `#define NAME "value"`, empty if missing
fn header_define(contents: &str, name: &str) -> String {
    let needle = format!("#define {}", name);
    contents
        .lines()
        .find(|l| l.trim_start().starts_with(&needle))
        .and_then(|l| l.split('"').nth(1))
        .unwrap_or_default()
        .to_string()
}
