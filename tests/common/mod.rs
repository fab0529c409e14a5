//! Common test utilities

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Get the path to the energymeter binary
pub fn energymeter_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("energymeter");
    path
}

/// Run energymeter with the given arguments
pub fn run_energymeter(args: &[&str]) -> Output {
    Command::new(energymeter_bin())
        .args(args)
        .output()
        .expect("failed to execute energymeter")
}

/// Run energymeter with `input` piped to stdin
pub fn run_energymeter_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(energymeter_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn energymeter");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().expect("failed to wait for energymeter")
}

/// A printed projection table: chart title plus (label, watt-hours) rows
#[derive(Debug)]
pub struct Table {
    pub title: String,
    pub rows: Vec<(String, f64)>,
}

/// Extract every projection table printed to stdout, in order
pub fn parse_tables(stdout: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut lines = stdout.lines();

    while let Some(line) = lines.next() {
        let Some(title) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
            continue;
        };

        // Header, then separator
        lines.next();
        lines.next();

        let mut rows = Vec::new();
        for row in lines.by_ref() {
            if row.starts_with("---") {
                break;
            }
            if row == "(no data)" {
                continue;
            }
            let (label, rest) = row.split_at(12.min(row.len()));
            let value = rest
                .split_whitespace()
                .next()
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or_else(|| panic!("bad table row: {:?}", row));
            rows.push((label.trim().to_string(), value));
        }

        tables.push(Table {
            title: title.to_string(),
            rows,
        });
    }

    tables
}
