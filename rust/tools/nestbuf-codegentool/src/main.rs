//! Regenerates the checked-in FlatBuffers accessors of `nestbuf-format`.
//!
//! Run from the repository root with the `planus` CLI on `PATH`:
//! `cargo run -p nestbuf-codegentool -- generate-flatbuffers`.

use std::path::PathBuf;

use xshell::Shell;

fn main() {
    let matches = clap::Command::new("codegentool")
        .subcommand_required(true)
        .subcommand(clap::Command::new("generate-flatbuffers"))
        .subcommand(
            clap::Command::new("check-flatbuffers")
                .about("Fails if the .fbs schemas are missing their generated module"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("generate-flatbuffers", _args)) => generate_flatbuffers(),
        Some(("check-flatbuffers", _args)) => check_flatbuffers(),
        _ => panic!("Unknown subcommand {:?}", matches.subcommand()),
    }
}

fn out_dir() -> PathBuf {
    let src_dir = std::env::current_dir()
        .expect("current_dir")
        .join("rust")
        .join("nestbuf-format")
        .join("src");
    assert!(
        src_dir.exists(),
        "generate_flatbuffers: {} does not exist",
        src_dir.display()
    );
    src_dir.join("defs")
}

fn schema_files(sh: &Shell) -> Vec<PathBuf> {
    let schema_dir = std::env::current_dir()
        .expect("current_dir")
        .join("proto_defs")
        .join("user_format");
    sh.read_dir(&schema_dir)
        .expect("read schema dir")
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == "fbs"))
        .collect()
}

fn generated_path(out_dir: &std::path::Path, input_fbs: &std::path::Path) -> PathBuf {
    let out_name = input_fbs
        .file_name()
        .expect("fbs file name")
        .to_string_lossy();
    out_dir.join(format!("{out_name}.rs"))
}

fn generate_flatbuffers() {
    let out_dir = out_dir();
    std::fs::create_dir_all(&out_dir).expect("create_dir_all");

    let sh = Shell::new().expect("shell");
    for input_fbs in schema_files(&sh) {
        let out_path = generated_path(&out_dir, &input_fbs);
        sh.cmd("planus")
            .arg("rust")
            .arg("-o")
            .arg(&out_path)
            .arg(&input_fbs)
            .run()
            .expect("generate from fbs");
    }
}

fn check_flatbuffers() {
    let out_dir = out_dir();
    let sh = Shell::new().expect("shell");
    let missing = schema_files(&sh)
        .into_iter()
        .map(|input_fbs| generated_path(&out_dir, &input_fbs))
        .filter(|path| !sh.path_exists(path))
        .collect::<Vec<_>>();
    assert!(
        missing.is_empty(),
        "generated modules are missing, run generate-flatbuffers: {missing:?}"
    );
}
