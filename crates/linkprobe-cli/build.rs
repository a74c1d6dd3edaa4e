//! Composes the definition set `hello` compiles with and enforces the
//! definition contract before any Rust code is compiled.
//!
//! Inputs: `foo`'s exported metadata (`DEP_FOO_*`), the build-mode features
//! and the cargo profile. Output: `LINKPROBE_DEFINITIONS`, read by
//! `src/build_config.rs` through `env!`.

use std::env;

use linkprobe_build::{Emitter, LinkMetadata, MacroContract, ModeRequest};

const CONTRACT: MacroContract<'static> = MacroContract {
    required: &["FOO_TEST_MACRO"],
    private: &["EXPORT_FOO_API"],
};

fn main() {
    let mut out = Emitter::stdout();
    out.rerun_if_changed("build.rs").unwrap();
    for var in LinkMetadata::env_vars("foo") {
        out.rerun_if_env_changed(&var).unwrap();
    }

    let foo = LinkMetadata::from_dependency("foo")
        .unwrap_or_else(|err| panic!("foo exported malformed metadata: {err}"));

    let violations = CONTRACT.violations(&foo.definitions);
    if !violations.is_empty() {
        for violation in &violations {
            out.warning(&violation.to_string()).unwrap();
        }
        panic!(
            "definition contract violated for hello ({} violation(s))",
            violations.len()
        );
    }

    let mut definitions = foo.definitions.clone();
    let profile = env::var("PROFILE").ok();
    let modes = ModeRequest::from_features()
        .resolve(&definitions, profile.as_deref())
        .unwrap_or_else(|err| panic!("invalid build-mode definition: {err}"));
    definitions.merge(&modes);

    out.rustc_env("LINKPROBE_DEFINITIONS", &definitions.to_string()).unwrap();
    out.rustc_env(
        "LINKPROBE_FOO_VERSION",
        foo.version.as_deref().unwrap_or("unknown"),
    )
    .unwrap();
}
