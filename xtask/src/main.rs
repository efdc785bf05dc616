use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use h3_udf_core::function_catalog::{SqlFunctionSpec, H3_FUNCTIONS};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let Some(cmd) = args.next() else {
        print_usage();
        return Err("missing command".to_string());
    };

    match cmd.as_str() {
        "precommit" => {
            let mut full = false;
            for arg in args {
                match arg.as_str() {
                    "--full" => full = true,
                    "--ci" => {}
                    _ => return Err(format!("unknown precommit flag: {arg}")),
                }
            }
            precommit(full)
        }
        "catalog" => {
            let mut check = false;
            for arg in args {
                match arg.as_str() {
                    "--check" => check = true,
                    _ => return Err(format!("unknown catalog flag: {arg}")),
                }
            }
            if check {
                check_readme_catalog()
            } else {
                print_catalog();
                Ok(())
            }
        }
        "install-hooks" => install_hooks(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            Err(format!("unknown command: {cmd}"))
        }
    }
}

fn print_usage() {
    eprintln!("xtask commands:");
    eprintln!("  precommit [--full] [--ci]");
    eprintln!("  catalog [--check]");
    eprintln!("  install-hooks");
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask must live inside workspace")
        .to_path_buf()
}

fn precommit(full: bool) -> Result<(), String> {
    let root = repo_root();
    let mut steps: Vec<Vec<&str>> = vec![
        vec!["cargo", "fmt", "--all", "--", "--check"],
        vec![
            "cargo",
            "clippy",
            "-p",
            "h3-udf-core",
            "-p",
            "h3-udf-sqlite",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
        vec!["cargo", "test", "--workspace"],
        vec!["cargo", "run", "--quiet", "-p", "xtask", "--", "catalog", "--check"],
    ];

    if full {
        steps.push(vec![
            "cargo",
            "test",
            "-p",
            "h3-udf-sqlite",
            "--target",
            "wasm32-unknown-unknown",
            "--test",
            "wasm",
        ]);
    }

    for step in steps {
        run_step(&root, &step)?;
    }
    Ok(())
}

fn run_step(cwd: &Path, args: &[&str]) -> Result<(), String> {
    let (bin, rest) = args
        .split_first()
        .ok_or_else(|| "empty command step".to_string())?;
    eprintln!("+ {}", args.join(" "));

    let status = Command::new(bin)
        .args(rest)
        .current_dir(cwd)
        .status()
        .map_err(io_err)?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {}", args.join(" ")))
    }
}

fn signature(spec: &SqlFunctionSpec) -> String {
    format!("{}/{}", spec.name, spec.n_arg)
}

fn print_catalog() {
    for spec in H3_FUNCTIONS {
        println!("{}", signature(spec));
    }
    eprintln!("{} functions", H3_FUNCTIONS.len());
}

/// Fails if a registered function is missing from the README function table.
fn check_readme_catalog() -> Result<(), String> {
    let readme = fs::read_to_string(repo_root().join("README.md")).map_err(io_err)?;
    let missing: Vec<String> = H3_FUNCTIONS
        .iter()
        .filter(|spec| !readme.contains(&format!("`{}`", spec.name)))
        .map(signature)
        .collect();
    if missing.is_empty() {
        println!("README lists all {} functions", H3_FUNCTIONS.len());
        Ok(())
    } else {
        Err(format!("README is missing: {}", missing.join(", ")))
    }
}

fn install_hooks() -> Result<(), String> {
    let root = repo_root();
    let hook_path = root.join(".git/hooks/pre-commit");
    let script = format!(
        "#!/usr/bin/env sh\nset -eu\ncd \"{}\"\ncargo run --quiet -p xtask -- precommit\n",
        root.display()
    );

    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(&hook_path, script).map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path).map_err(io_err)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms).map_err(io_err)?;
    }

    println!("installed pre-commit hook at {}", hook_path.display());
    Ok(())
}

fn io_err(e: io::Error) -> String {
    e.to_string()
}
