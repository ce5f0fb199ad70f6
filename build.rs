use std::{
    env,
    io::{self, Result, Write},
    process::{Command, Output},
};

fn main() {
    set_compiler_version_env();
}

fn set_compiler_version_env() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    set_env_from_output(
        "LITCONV_COMPILER_VERSION",
        Command::new(rustc).arg("-V").output(),
    );
}

fn set_env_from_output(name: &str, result: Result<Output>) {
    let output = result.expect("fatal error executing command");
    if output.status.success() {
        let val = String::from_utf8(output.stdout).expect("command output conversion failure");
        println!("cargo:rustc-env={name}={}", val.trim());
    } else {
        io::stderr()
            .write_all(&output.stderr)
            .expect("print stderr failure");
        panic!("command run error: {:?}", output.status);
    }
}
