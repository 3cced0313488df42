use once_cell::sync::Lazy;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Name passed to the linker (`-l`).
const SDK_LIB_NAME: &str = "ArducamDepthCamera2c";

/// pkg-config module shipped by some SDK packages.
const SDK_PKG_CONFIG_NAME: &str = "ArducamDepthCamera2c";

/// Fallback locations used by the vendor's Debian packages on Raspberry Pi OS and Jetson.
const SYSTEM_LIB_DIRS: &[&str] = &[
    "/usr/lib",
    "/usr/local/lib",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/lib/arm-linux-gnueabihf",
    "/usr/lib/x86_64-linux-gnu",
];

static SDK_LIB_FILE: Lazy<String> = Lazy::new(|| {
    if cfg!(target_os = "windows") {
        format!("{SDK_LIB_NAME}.dll")
    } else if cfg!(target_os = "macos") {
        format!("lib{SDK_LIB_NAME}.dylib")
    } else {
        format!("lib{SDK_LIB_NAME}.so")
    }
});

macro_rules! println_build {
    ($($tokens:tt)*) => {
        println!("cargo:warning=\r\x1b[32;1m   {}", format!($($tokens)*))
    }
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(arducam_linked)");
    println!("cargo:rerun-if-env-changed=ARDUCAM_TOF_LIB_DIR");
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_LATEST").is_some() && env::var_os("CARGO_FEATURE_V0_1_3").is_some() {
        panic!("features `latest` and `v0-1-3` select incompatible SDK headers; enable only one");
    }

    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        // Declarations only (docs.rs, cross-checking on hosts without the SDK).
        return;
    }

    match resolve_sdk_lib() {
        Some(SdkLocation::Directory(dir)) => {
            println!("cargo:rustc-link-search=native={}", dir.display());
            println!("cargo:rustc-link-lib=dylib={SDK_LIB_NAME}");
            println!("cargo:rustc-cfg=arducam_linked");
            println!("cargo:root={}", dir.display());
        }
        Some(SdkLocation::PkgConfig) => {
            println!("cargo:rustc-cfg=arducam_linked");
        }
        None => {
            println_build!(
                "{} not found; building without the Arducam SDK. Set ARDUCAM_TOF_LIB_DIR to link it.",
                SDK_LIB_FILE.as_str()
            );
        }
    }
}

enum SdkLocation {
    Directory(PathBuf),
    /// pkg-config already printed the link directives.
    PkgConfig,
}

fn resolve_sdk_lib() -> Option<SdkLocation> {
    if let Ok(dir) = env::var("ARDUCAM_TOF_LIB_DIR") {
        let dir = PathBuf::from(dir);
        if contains_sdk_lib(&dir) {
            return Some(SdkLocation::Directory(dir));
        }
        println_build!(
            "ARDUCAM_TOF_LIB_DIR is set but {} is not in {}",
            SDK_LIB_FILE.as_str(),
            dir.display()
        );
    }

    if pkg_config::Config::new()
        .cargo_metadata(true)
        .probe(SDK_PKG_CONFIG_NAME)
        .is_ok()
    {
        return Some(SdkLocation::PkgConfig);
    }

    SYSTEM_LIB_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| contains_sdk_lib(dir))
        .map(SdkLocation::Directory)
}

fn contains_sdk_lib(dir: &Path) -> bool {
    dir.join(SDK_LIB_FILE.as_str()).exists()
}
