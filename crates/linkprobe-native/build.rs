//! Links the platform frameworks the window server adapter calls into.

use std::env;

use linkprobe_build::Emitter;

fn main() {
    let mut out = Emitter::stdout();
    out.rerun_if_changed("build.rs").unwrap();

    // Target, not host: build scripts run on the host when cross-compiling.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        out.link_framework("CoreFoundation").unwrap();
        out.link_framework("CoreGraphics").unwrap();
    }
}
