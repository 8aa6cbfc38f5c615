//! Direct and transitive dependency extraction.

mod common;

use std::collections::BTreeSet;

use alint_analysis::{transitive_dependencies, FileError, WalkVisitor};
use common::*;

#[derive(Default)]
struct Recorder {
    parsed: Vec<String>,
    failed: Vec<String>,
}

impl WalkVisitor for Recorder {
    fn parsed(&mut self, path: &str, _source: &TokenSource, _tree: &Node) {
        self.parsed.push(path.to_string());
    }

    fn failed(&mut self, path: &str, _source: &TokenSource, _error: &FileError) {
        self.failed.push(path.to_string());
    }
}

fn direct(text: &str, dirs: &MacroDirs) -> BTreeSet<String> {
    let source = load(text);
    direct_dependencies(&parse_ok(&source), dirs)
}

#[test]
fn test_direct_dependencies_ignore_order() {
    let dirs = MacroDirs::new("g/", "l/");
    let forward = direct(
        "a.mac()\n_b.mac()\nIF(x>0)THEN\n  c.mac()\nENDIF\nendmacro\n",
        &dirs,
    );
    let backward = direct(
        "IF(x>0)THEN\n  c.mac()\nENDIF\n_b.mac()\na.mac()\na.mac()\nendmacro\n",
        &dirs,
    );
    assert_eq!(forward, backward);
    assert_eq!(
        forward.into_iter().collect::<Vec<_>>(),
        vec!["g/a.mac", "g/c.mac", "l/_b.mac"]
    );
}

#[test]
fn test_nested_bodies_are_searched() {
    let text = "\
MACRO Mm.mac
  FOR i=0 TO 1 DO(\"a\")
    IF(x>0)THEN
      y
    ELSE
      deep.mac(1; =v)
    ENDIF
  ENDDO(\"a\")
endmacro
ENDMACRO Mm.mac
Mm.mac()
endmacro
";
    let found = direct(text, &MacroDirs::new("/r/", "/p/"));
    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["/r/deep.mac"]);
}

#[test]
fn test_cycle_visits_each_file_once() {
    let dir = temp_dir("cycle");
    write_file(&dir.join("a.mac"), "b.mac()\nendmacro\n");
    write_file(&dir.join("b.mac"), "a.mac()\nendmacro\n");
    let dirs = MacroDirs::new(prefix(&dir), "");
    let root = format!("{}a.mac", prefix(&dir));

    let mut source = TokenSource::new();
    let mut recorder = Recorder::default();
    let walk = walk_dependencies(&root, &dirs, &mut source, &mut recorder);

    let expected: BTreeSet<String> = [root.clone(), format!("{}b.mac", prefix(&dir))]
        .into_iter()
        .collect();
    assert_eq!(walk.visited, expected);
    assert!(walk.failures.is_empty());
    assert_eq!(recorder.parsed.len(), 2);
    assert_eq!(transitive_dependencies(&root, &dirs), expected);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_broken_dependencies_do_not_stop_the_walk() {
    let dir = temp_dir("broken");
    write_file(
        &dir.join("a.mac"),
        "b.mac()\nmissing.mac()\nbad.mac()\nendmacro\n",
    );
    write_file(&dir.join("b.mac"), "_c.mac()\nendmacro\n");
    write_file(&dir.join("bad.mac"), "x (\nendmacro\n");
    write_file(&dir.join("local/_c.mac"), "y\nendmacro\n");
    let dirs = MacroDirs::new(prefix(&dir), prefix(&dir.join("local")));
    let root = format!("{}a.mac", prefix(&dir));

    let mut source = TokenSource::new();
    let mut recorder = Recorder::default();
    let walk = walk_dependencies(&root, &dirs, &mut source, &mut recorder);

    assert_eq!(walk.visited.len(), 5);
    assert!(walk.visited.contains(&format!("{}_c.mac", prefix(&dir.join("local")))));
    recorder.parsed.sort();
    recorder.failed.sort();
    assert_eq!(
        recorder.parsed,
        vec![
            root.clone(),
            format!("{}b.mac", prefix(&dir)),
            format!("{}_c.mac", prefix(&dir.join("local"))),
        ]
    );
    assert_eq!(
        recorder.failed,
        vec![
            format!("{}bad.mac", prefix(&dir)),
            format!("{}missing.mac", prefix(&dir)),
        ]
    );

    let kinds: Vec<bool> = {
        let mut failures: Vec<_> = walk.failures.iter().collect();
        failures.sort_by(|a, b| a.0.cmp(&b.0));
        failures
            .iter()
            .map(|(_, error)| matches!(error, FileError::Parse(_)))
            .collect()
    };
    assert_eq!(kinds, vec![true, false]);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_unreadable_root_is_reported() {
    let mut source = TokenSource::new();
    let walk = walk_dependencies(
        "/nonexistent/alint/root.mac",
        &MacroDirs::default(),
        &mut source,
        &mut (),
    );
    assert_eq!(walk.visited.len(), 1);
    assert!(matches!(walk.failures.as_slice(), [(_, FileError::Source(_))]));
}
