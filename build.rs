use std::env;

// Which implementation of the operation set gets compiled. Decided once per
// build; there is no runtime dispatch.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Backend {
    Native,
    Portable,
    Auto,
}

impl Backend {
    // Single recognized knob: PACKED64_BACKEND=native|portable|auto.
    // Anything unrecognized falls back to auto rather than failing the build.
    fn from_env() -> Backend {
        match env::var("PACKED64_BACKEND").as_deref() {
            Ok("native") => Backend::Native,
            Ok("portable") => Backend::Portable,
            _ => Backend::Auto,
        }
    }
}

// The native path rides on SSE2 over the low 64 bits of an XMM register,
// which is baseline on every x86_64 target, so no CPU probing is needed the
// way wider feature tiers would require it.
fn native_path_available() -> bool {
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    target_arch == "x86_64"
}

fn apply(backend: Backend) {
    let use_native = match backend {
        Backend::Portable => false,
        Backend::Native | Backend::Auto => native_path_available(),
    };

    if use_native {
        println!("cargo:rustc-cfg=sse2");
    }

    // Disable flag warnings for build
    println!("cargo::rustc-check-cfg=cfg(sse2)");
}

fn main() {
    println!("cargo:rerun-if-env-changed=PACKED64_BACKEND");

    let backend = Backend::from_env();

    apply(backend);
}
