use std::env;
use std::path::PathBuf;

const LIB_DIR_VAR: &str = "CROSSCHECK_COMPILED_LIB_DIR";
const LIB_NAME_VAR: &str = "CROSSCHECK_COMPILED_LIB";
const LIB_KIND_VAR: &str = "CROSSCHECK_COMPILED_LIB_KIND";

fn main() {
    println!("cargo:rerun-if-env-changed={LIB_DIR_VAR}");
    println!("cargo:rerun-if-env-changed={LIB_NAME_VAR}");
    println!("cargo:rerun-if-env-changed={LIB_KIND_VAR}");

    // The symbols are produced by the external code generator. Without its
    // output there is nothing to link against, so stop the build here rather
    // than at the first call.
    let Some(lib_dir) = env::var_os(LIB_DIR_VAR).map(PathBuf::from) else {
        panic!(
            "{LIB_DIR_VAR} is not set: point it at the directory holding the compiled \
             object (lib<name>.a), or build without the `linked` feature"
        );
    };

    let lib_name = env::var(LIB_NAME_VAR).unwrap_or_else(|_| "compiled".to_string());
    let lib_kind = env::var(LIB_KIND_VAR).unwrap_or_else(|_| "static".to_string());

    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib={lib_kind}={lib_name}");
}
