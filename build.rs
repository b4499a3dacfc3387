fn main() {
    // shown in the site footer as the last deploy time
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );
    println!("cargo:rerun-if-changed=build.rs");
}
