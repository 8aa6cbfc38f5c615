//! Guard pairing of loops and macro definitions.

mod common;

use common::*;

#[test]
fn test_matching_loop_guard_is_clean() {
    assert!(guard_messages("FOR i=0 TO 10 DO(\"L1\")\n x\n ENDDO(\"L1\")\nendmacro").is_empty());
}

#[test]
fn test_mismatched_loop_guard_cites_enddo() {
    assert_eq!(
        guard_messages("FOR i=0 TO 10 DO(\"L1\")\n x\n ENDDO(\"L2\")\nendmacro"),
        vec!["t.mac:3:2 warning: DO \"L1\" doesn't match ENDDO \"L2\" guard value"]
    );
}

#[test]
fn test_warning_iff_guards_differ() {
    for (open, close) in [("a", "a"), ("a", "b"), ("", ""), ("", "x"), ("L 1", "L 1")] {
        let text = format!("FOR i=0 TO 1 STEP 1 DO(\"{open}\")\nx\nENDDO(\"{close}\")\nendmacro\n");
        assert_eq!(guard_messages(&text).len(), usize::from(open != close), "{text}");
    }
}

#[test]
fn test_nested_loops() {
    let clean = "\
FOR i=0 TO 2 DO(\"outer\")
  FOR j=0 TO 2 DO(\"inner\")
    x
  ENDDO(\"inner\")
ENDDO(\"outer\")
endmacro
";
    assert!(guard_messages(clean).is_empty());

    let inner_mismatch = clean.replace("ENDDO(\"inner\")", "ENDDO(\"other\")");
    assert_eq!(
        guard_messages(&inner_mismatch),
        vec!["t.mac:4:3 warning: DO \"inner\" doesn't match ENDDO \"other\" guard value"]
    );
}

#[test]
fn test_mismatched_macro_guard() {
    let text = "MACRO Ma.mac\n  x\nendmacro\nENDMACRO Mb.mac\nendmacro\n";
    assert_eq!(
        guard_messages(text),
        vec!["t.mac:4:10 warning: MACRO \"Ma.mac\" doesn't match ENDMACRO \"Mb.mac\" guard value."]
    );
}

#[test]
fn test_nested_macro_definitions() {
    let text = "\
MACRO Mouter.mac
  MACRO Minner.mac
    x
  endmacro
  ENDMACRO Minner.mac
  FOR i=0 TO 1 DO(\"a\")
    y
  ENDDO(\"a\")
endmacro
ENDMACRO Mouter.mac
endmacro
";
    assert!(guard_messages(text).is_empty());
}

#[test]
fn test_guards_inside_if_branches() {
    let text = "\
IF(x>0) THEN
  FOR i=0 TO 1 DO(\"a\")
    y
  ENDDO(\"a\")
ELSE
  FOR i=0 TO 1 DO(\"b\")
    y
  ENDDO(\"c\")
ENDIF
endmacro
";
    assert_eq!(guard_messages(text).len(), 1);
}
