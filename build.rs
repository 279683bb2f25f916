fn main() {
    // Relay credentials are embedded with option_env!, so changing them must rebuild
    for var in [
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
    ] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
