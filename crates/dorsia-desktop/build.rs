fn main() {
    // The frontend is a static bundle checked in under ui/; no build step.
    println!("cargo:rerun-if-changed=ui");

    tauri_build::build();
}
