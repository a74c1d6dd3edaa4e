//! Builds the local `foo` library.
//!
//! `foo` compiles with its public and private definitions, its build-mode
//! definitions and both include directories, but exports only the public
//! definitions to consumers through `links = "foo"` metadata
//! (`DEP_FOO_DEFINITIONS`, `DEP_FOO_INCLUDE`, `DEP_FOO_VERSION`).

use std::env;
use std::path::PathBuf;

use linkprobe_build::{DEBUG, Definitions, Emitter, LinkMetadata, ModeRequest, NDEBUG};

/// Version of the C library, independent of the crate version.
const LIBRARY_VERSION: &str = "1.0.0";

const SOURCES: [&str; 2] = ["foo.c", "bar.c"];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let csrc = manifest_dir.join("csrc");
    let public_include = csrc.join("include");
    let private_include = csrc.join("private");

    let public = Definitions::new()
        .with("FOO_TEST_MACRO", Some("4"))
        .expect("public definitions are valid");
    let private = Definitions::new()
        .with("EXPORT_FOO_API", Some(""))
        .expect("private definitions are valid");

    let mut own = public.clone();
    own.merge(&private);

    // Modes apply to foo's own units only; consumers resolve their own.
    let profile = env::var("PROFILE").ok();
    let modes = ModeRequest::from_features()
        .resolve(&own, profile.as_deref())
        .expect("mode definitions are valid");
    own.merge(&modes);

    let mut build = cc::Build::new();
    build
        .include(&public_include)
        .include(&private_include)
        .flag_if_supported("-std=c17")
        .warnings(true);
    for def in own.iter() {
        build.define(&def.name, def.value.as_deref());
    }
    for src in SOURCES {
        build.file(csrc.join(src));
    }
    build.compile("foo");

    let mut out = Emitter::stdout();
    out.rerun_if_changed("build.rs").unwrap();
    out.rerun_if_changed(&csrc).unwrap();

    // The crate's own Rust code sees every definition, like foo's C sources.
    out.definition_cfgs(&own, &["EXPORT_FOO_API", "FOO_TEST_MACRO", DEBUG, NDEBUG]).unwrap();
    out.rustc_env("FOO_LIBRARY_VERSION", LIBRARY_VERSION).unwrap();

    LinkMetadata {
        definitions: public,
        include: Some(public_include),
        version: Some(LIBRARY_VERSION.to_string()),
    }
    .emit(&mut out)
    .unwrap();
}
