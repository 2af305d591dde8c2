use std::cmp::Ordering;
use std::env;

// Vector backends this crate can be built against
#[derive(PartialEq, Eq, Debug)]
struct Backend {
    name: &'static str,
    target_arches: &'static [&'static str],
    target_feature: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl Backend {
    // Lowest number == highest priority
    fn priority(&self) -> usize {
        match self.name {
            "neon" => 0,
            "sse" => 1,
            _ => usize::MAX,
        }
    }

    fn backends() -> Vec<Backend> {
        vec![
            Backend {
                name: "sse",
                target_arches: &["x86", "x86_64"],
                target_feature: "sse2",
                cfg_flag: "sse",
                detected: false,
            },
            Backend {
                name: "neon",
                target_arches: &["aarch64"],
                target_feature: "neon",
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for Backend {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for Backend {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reads what cargo tells us about the target rather than probing the host,
// so cross builds pick the right backend too.
struct TargetDetector {
    arch: String,
    features: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(|feature| feature.trim().to_string())
            .filter(|feature| !feature.is_empty())
            .collect();

        Self { arch, features }
    }

    fn detect(&self, backends: &mut [Backend]) {
        for backend in backends.iter_mut() {
            backend.detected = backend.target_arches.contains(&self.arch.as_str())
                && self.features.iter().any(|f| f == backend.target_feature);
        }
    }
}

enum Request {
    Auto,
    Portable,
    Named(String),
}

fn requested_backend() -> Request {
    if env::var_os("CARGO_FEATURE_PORTABLE").is_some() {
        return Request::Portable;
    }

    match env::var("VEC128_BACKEND") {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Request::Auto,
            "portable" | "fallback" => Request::Portable,
            name => Request::Named(name.to_string()),
        },
        Err(_) => Request::Auto,
    }
}

fn apply(backends: &mut [Backend], request: Request) {
    backends.sort();

    let cfg_flag = match request {
        Request::Portable => "fallback",
        Request::Auto => backends
            .iter()
            .find(|backend| backend.detected)
            .map(|backend| backend.cfg_flag)
            .unwrap_or("fallback"),
        Request::Named(name) => match backends.iter().find(|b| b.name == name) {
            Some(backend) if backend.detected => backend.cfg_flag,
            _ => {
                println!(
                    "cargo:warning=VEC128_BACKEND={name} is not available for this target, using the portable backend"
                );
                "fallback"
            }
        },
    };

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(sse)");
    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VEC128_BACKEND");

    let mut backends = Backend::backends();

    TargetDetector::from_env().detect(&mut backends);

    apply(&mut backends, requested_backend());
}
