//! Raw declarations for `libArducamDepthCamera2c`, the C API of the Arducam ToF SDK.
//!
//! Two header revisions exist and they are not binary compatible (enum ordering and
//! the set of functions differ). The `v0-1-3` feature selects the 0.1.3 header, the
//! current header is used otherwise.
//!
//! Everything here mirrors the vendor header one-for-one. See the `arducam-tof` crate
//! for a safe API.

#![allow(non_camel_case_types, non_upper_case_globals, non_snake_case)]

#[cfg(all(feature = "latest", feature = "v0-1-3"))]
compile_error!("features `latest` and `v0-1-3` select incompatible SDK headers; enable only one");

#[cfg(not(feature = "v0-1-3"))]
mod latest;
#[cfg(not(feature = "v0-1-3"))]
pub use latest::*;

#[cfg(feature = "v0-1-3")]
mod v0_1_3;
#[cfg(feature = "v0-1-3")]
pub use v0_1_3::*;

/// Function table bound to the SDK library linked at build time.
///
/// Returns `None` when the build script did not find the library (see the `native`
/// feature and the `ARDUCAM_TOF_LIB_DIR` environment variable).
#[cfg(arducam_linked)]
pub fn linked() -> Option<&'static ArducamApi> {
    Some(&LINKED)
}

#[cfg(not(arducam_linked))]
pub fn linked() -> Option<&'static ArducamApi> {
    None
}

/// Whether this build links the vendor library.
pub const fn is_linked() -> bool {
    cfg!(arducam_linked)
}
