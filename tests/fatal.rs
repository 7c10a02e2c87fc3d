//! The fatal path aborts the process, so each case runs in a child copy of
//! this test binary and the parent inspects its exit status and stderr.

use splitrng::{Rng, init_key, sample_i32, sample_i32_biased};

use std::env;
use std::process::{Command, Output};

const CASE_VAR: &str = "SPLITRNG_FATAL_CASE";

/// Entry point for the child process. Does nothing in a normal test run.
#[test]
fn fatal_case() {
    let Ok(case) = env::var(CASE_VAR) else {
        return;
    };

    match case.as_str() {
        "empty" => {
            sample_i32(init_key(1, 0), 5, 5);
        }
        "inverted" => {
            sample_i32(init_key(1, 0), 5, 3);
        }
        "biased" => {
            sample_i32_biased(init_key(1, 0), 0, 0);
        }
        "stream" => {
            Rng::from_seed(1).sample_i32(5, 5);
        }
        "catch_unwind" => {
            let caught = std::panic::catch_unwind(|| sample_i32(init_key(1, 0), 2, 1));
            println!("recovered: {}", caught.is_err());
        }
        other => panic!("unknown case {other}"),
    }

    println!("survived fatal case");
}

fn run_case(case: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");

    Command::new(exe)
        .args(["fatal_case", "--exact", "--nocapture", "--test-threads=1"])
        .env(CASE_VAR, case)
        .output()
        .expect("spawn child test process")
}

fn assert_aborted(out: &Output, message: &str) {
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(!out.status.success(), "child exited cleanly:\n{stdout}\n{stderr}");
    assert!(!stdout.contains("survived fatal case"), "{stdout}");
    assert!(!stdout.contains("recovered"), "{stdout}");
    assert!(stderr.contains(message), "{stderr}");
    assert!(stderr.contains("tests/fatal.rs"), "{stderr}");

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(out.status.signal(), Some(6), "expected SIGABRT");
    }
}

#[test]
fn empty_range_aborts() {
    let out = run_case("empty");
    assert_aborted(&out, "sample_i32: empty sample range [5, 5)");
}

#[test]
fn inverted_range_aborts() {
    let out = run_case("inverted");
    assert_aborted(&out, "sample_i32: empty sample range [5, 3)");
}

#[test]
fn biased_empty_range_aborts() {
    let out = run_case("biased");
    assert_aborted(&out, "sample_i32_biased: empty sample range [0, 0)");
}

#[test]
fn stream_empty_range_aborts() {
    let out = run_case("stream");
    assert_aborted(&out, "sample_i32: empty sample range [5, 5)");
}

#[test]
fn catch_unwind_cannot_recover() {
    let out = run_case("catch_unwind");
    assert_aborted(&out, "sample_i32: empty sample range [2, 1)");
}
