mod common;
use std::fmt::Write as _;

use common::*;
use views::{ForLoop, IfStatement, MacroDefinition};

#[test]
fn test_if_else_statement() {
    let tree = parse_ok("IF(x>0)THEN\n  y\nELSE\n  z\n  w\nENDIF\nendmacro\n");
    let stmts = top_level(&tree);
    assert_eq!(stmts.len(), 1);

    let if_node = &stmts[0].children()[0];
    let view = IfStatement::cast(if_node).expect("if statement");
    assert_eq!(view.then_kw.text, "THEN");
    assert_eq!(view.endif_kw.coordinate.line, 6);
    assert_eq!(view.clause.production(), Some(Production::IfClause));
    assert_eq!(
        view.clause.children()[2].production(),
        Some(Production::ConditionComparison)
    );

    let (else_kw, else_body) = view.else_branch.expect("else branch");
    assert_eq!(else_kw.text, "ELSE");
    assert_eq!(views::statements(else_body).count(), 2);
}

#[test]
fn test_ifdefined_clause() {
    for keyword in ["IFDEFINED", "IFMMDEFINED", "IFDBDEFINED", "IFNOTDEFINED", "IFASCIIFILE"] {
        let tree = parse_ok(&format!("{keyword}(var) THEN\n  x\nENDIF\nendmacro"));
        let view = IfStatement::cast(&top_level(&tree)[0].children()[0]).expect("if statement");
        assert_eq!(view.clause.production(), Some(Production::IfDefClause), "{keyword}");
    }
}

#[test]
fn test_for_loop_view() {
    let tree = parse_ok("FOR i=0 TO n-1 DO(\"outer\")\n  x\nENDDO(\"outer\")\nendmacro");
    let view = ForLoop::cast(&top_level(&tree)[0].children()[0]).expect("for loop");
    assert_eq!(view.variable.text, "i");
    assert_eq!(view.do_kw.text, "DO(\"outer\")");
    assert_eq!(view.enddo_kw.text, "ENDDO(\"outer\")");
    assert!(view.step.is_none());
    assert_eq!(view.stop.production(), Some(Production::ExpressionMinus));
    assert_eq!(view.body.symbol(), Symbol::StmtList);
}

#[test]
fn test_macro_definition_view() {
    let text = "MACRO Mhelper.mac\n  x\nendmacro ENDMACRO Mhelper.mac\nMhelper.mac()\nendmacro\n";
    let tree = parse_ok(text);
    let stmts = top_level(&tree);
    assert_eq!(stmts.len(), 2);

    let view = MacroDefinition::cast(&stmts[0].children()[0]).expect("macro definition");
    assert_eq!(view.name.text, "Mhelper.mac");
    assert_eq!(view.closing_name.text, "Mhelper.mac");
    assert_eq!(view.endmacro_kw.symbol, Symbol::EndmacroKw);
    assert_eq!(stmts[1].production(), Some(Production::StmtMacroCall));
    assert_eq!(
        stmts[1].children()[0].production(),
        Some(Production::MacroCallEmpty)
    );
}

#[test]
fn test_macro_call_arguments() {
    let tree = parse_ok("_dir/local.mac(=out; %mode; 1 + x; \"text\")\nendmacro");
    let call = &top_level(&tree)[0].children()[0];
    assert_eq!(call.production(), Some(Production::MacroCallArgs));
    assert_eq!(
        call.children()[0].production(),
        Some(Production::MacroNameLocal)
    );

    let mut args = Vec::new();
    let mut list = &call.children()[2];
    loop {
        args.push(list.children()[0].production());
        match list.production() {
            Some(Production::MacroArgListMore) => list = &list.children()[2],
            _ => break,
        }
    }
    assert_eq!(
        args,
        vec![
            Some(Production::MacroArgEqual),
            Some(Production::MacroArgPercent),
            Some(Production::MacroArgExpression),
            Some(Production::MacroArgString),
        ]
    );
}

#[test]
fn test_function_call_in_expression() {
    let tree = parse_ok("(y = max(a, 2) / (b, c))\nendmacro");
    let stmt = top_level(&tree)[0];
    let leaves: Vec<_> = stmt.leaves().map(|leaf| leaf.symbol).collect();
    assert_eq!(leaves.first(), Some(&Symbol::Lp));
    assert_eq!(leaves.last(), Some(&Symbol::Rp));
    assert_eq!(stmt.first_lexeme_id().get(), 1);
    assert_eq!(stmt.last_lexeme_id().get(), 16);
}

#[test]
fn test_simple_statements() {
    let tree = parse_ok("# c\n## v\n! ls\nname\n12\n\"s\"\n*\nendmacro");
    let productions: Vec<_> = top_level(&tree)
        .iter()
        .map(|stmt| stmt.production())
        .collect();
    assert_eq!(
        productions,
        vec![
            Some(Production::StmtComment),
            Some(Production::StmtVisualComment),
            Some(Production::StmtShellEscape),
            Some(Production::StmtIdentifier),
            Some(Production::StmtNumber),
            Some(Production::StmtString),
            Some(Production::StmtMult),
        ]
    );
}

#[test]
fn test_long_statement_list() {
    let mut text = String::new();
    for i in 0..50_000 {
        let _ = writeln!(text, "x{i}");
    }
    text.push_str("endmacro\n");
    let tree = parse_ok(&text);
    assert_eq!(top_level(&tree).len(), 50_000);
    assert_eq!(tree.last_lexeme_id().get(), 50_002);
}

#[test]
fn test_errors_stop_parsing() {
    let err = parse_err("IF(x) THEN\nENDIF\nendmacro");
    assert_eq!(err.found, Symbol::EndifKw);
    assert_eq!(err.coordinate.line, 2);

    let err = parse_err("");
    assert_eq!(err.found, Symbol::Eoi);

    let err = parse_err("x endmacro y");
    assert_eq!(err.found, Symbol::Identifier);
    assert_eq!(err.to_string(), "unexpected identifier (y) instead of a eoi.");
}
