//! Build-script helper that generates field path artifacts into `OUT_DIR`.
//!
//! The generated index is pulled into the crate with
//! `include!(concat!(env!("OUT_DIR"), "/fieldpaths.rs"));`.
#[macro_export]
macro_rules! build {
    ($manifest:expr) => {
        $crate::build!($manifest, $crate::config::CONFIG_FILE_NAME)
    };
    ($manifest:expr, $config:expr) => {
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $manifest);
        println!("cargo:rerun-if-changed={}", $config);

        // Get the output directory set by Cargo
        let out_dir = ::std::env::var("OUT_DIR").expect("OUT_DIR not set");

        //
        // FIELD PATHS
        //

        $crate::generate_from_manifest($manifest, $config, out_dir)?;
    };
}
