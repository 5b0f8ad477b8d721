use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/arith/v1/arith.proto");
    println!("cargo:rerun-if-changed=proto");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    // Use the vendored protoc so the build does not depend on a system install.
    let mut config = prost_build::Config::new();
    config.protoc_executable(protoc_bin_vendored::protoc_bin_path()?);

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .file_descriptor_set_path(out_dir.join("arith_descriptor.bin"))
        .compile_with_config(config, &["proto/arith/v1/arith.proto"], &["proto"])?;

    Ok(())
}
