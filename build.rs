#![forbid(unsafe_code)]

fn main() {
    // Only the toolchain stamp; the git stamps would tie builds to a checkout.
    build_data::set_RUSTC_VERSION();

    // Tells cargo not to rebuild build.rs during debug builds when other files change.
    // This speeds up development builds.
    //build_data::no_debug_rebuilds();
}
