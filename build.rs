use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // No rerun-if-changed hints: cargo reruns this after any change in the
    // package, so the id logged at startup tells builds apart.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={}", build_id);
}
