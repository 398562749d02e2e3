use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("Required resource is missing: {0}")]
    MissingResource(&'static str),
}

const PROTO_INPUTS: [&str; 1] = ["resources/phone_formats.proto"];
const EMBEDDED_RESOURCES: [&str; 1] = ["resources/phone_formats.textproto"];

fn main() -> Result<(), BuildError> {
    for resource in PROTO_INPUTS.iter().chain(EMBEDDED_RESOURCES.iter()).copied() {
        if !Path::new(resource).exists() {
            return Err(BuildError::MissingResource(resource));
        }
        println!("cargo:rerun-if-changed={}", resource);
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .inputs(PROTO_INPUTS)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
