//! Shared helpers for pass tests.
#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub use alint_analysis::{
    check_guards, check_style, direct_dependencies, reformat, walk_dependencies, Diagnostic,
    MacroDirs,
};
pub use alint_syntax::{parse, Node, TokenSource};

/// Loads `text` as `t.mac`.
pub fn load(text: &str) -> TokenSource {
    let mut source = TokenSource::new();
    source.load_str("t.mac", text);
    source
}

/// Parses the loaded file, panicking with the diagnostic on a syntax error.
pub fn parse_ok(source: &TokenSource) -> Node {
    match parse(source) {
        Ok(tree) => tree,
        Err(err) => panic!("{}: {err}", err.coordinate),
    }
}

/// Guard warnings of `text`, rendered one per line.
pub fn guard_messages(text: &str) -> Vec<String> {
    let source = load(text);
    let tree = parse_ok(&source);
    check_guards(&tree).iter().map(ToString::to_string).collect()
}

/// Style warnings of `text`, rendered one per line.
pub fn style_messages(text: &str) -> Vec<String> {
    let source = load(text);
    let tree = parse_ok(&source);
    check_style(&tree, &source)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Reformats `text`.
pub fn format_text(text: &str) -> String {
    let source = load(text);
    let tree = parse_ok(&source);
    reformat(&tree, &source)
}

/// A fresh directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("alint-{name}-{}-{stamp}", std::process::id()));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Writes `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

/// `dir` as a concatenation prefix.
pub fn prefix(dir: &Path) -> String {
    format!("{}/", dir.display())
}
