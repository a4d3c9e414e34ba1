//! End-to-end tests through the public API

use logic_sim::{
    generate_truth_table, layout, parse, parse_expression, sequence_steps, tokenize, validate,
    Assignment, BinaryOp, Circuit, Error, NodeKind, Operator, TokenKind, ValidationError,
};

fn outputs(expression: &str) -> Vec<u8> {
    let circuit = Circuit::compile(expression).unwrap();
    circuit
        .truth_table
        .output_column()
        .into_iter()
        .map(u8::from)
        .collect()
}

fn validation_error(expression: &str) -> ValidationError {
    match Circuit::compile(expression) {
        Err(Error::Validation(err)) => err,
        other => panic!("expected a validation error for {:?}, got {:?}", expression, other),
    }
}

// ========== Evaluation ==========

#[test]
fn test_xor_truth_table() {
    assert_eq!(outputs("a xor b"), vec![0, 1, 1, 0]);
}

#[test]
fn test_complement_gates() {
    assert_eq!(outputs("a nand b"), vec![1, 1, 1, 0]);
    assert_eq!(outputs("a nor b"), vec![1, 0, 0, 0]);
    assert_eq!(outputs("a xnor b"), vec![1, 0, 0, 1]);
}

#[test]
fn test_nand_with_itself_is_not() {
    assert_eq!(outputs("a nand a"), outputs("not a"));
}

#[test]
fn test_precedence_and_over_or() {
    // a or (b and c): only rows with a=1 or b=c=1 are true
    assert_eq!(outputs("a or b and c"), vec![0, 0, 0, 1, 1, 1, 1, 1]);
    assert_eq!(outputs("(a or b) and c"), vec![0, 0, 0, 1, 0, 1, 0, 1]);
}

#[test]
fn test_not_scopes_to_next_operand() {
    assert_eq!(outputs("not a and b"), vec![0, 1, 0, 0]);
    assert_eq!(outputs("not (a and b)"), vec![1, 1, 1, 0]);
}

#[test]
fn test_row_count_and_distinct_prefixes() {
    let circuit = Circuit::compile("a and b or c and d").unwrap();
    let table = &circuit.truth_table;
    assert_eq!(table.len(), 16);
    let mut prefixes: Vec<&Vec<bool>> = table.rows.iter().map(|r| &r.inputs).collect();
    prefixes.dedup();
    assert_eq!(prefixes.len(), 16);
    assert_eq!(table.rows[0].inputs, vec![false; 4]);
    assert_eq!(table.rows[15].inputs, vec![true; 4]);
}

#[test]
fn test_stages_match_pipeline() {
    let tokens = tokenize("(a nor b) xor c");
    let validated = validate(&tokens).unwrap();
    let ast = parse(&validated.tokens).unwrap();
    let table = generate_truth_table(&ast, &validated.variables).unwrap();

    let circuit = Circuit::compile("(a nor b) xor c").unwrap();
    assert_eq!(circuit.ast, ast);
    assert_eq!(circuit.truth_table, table);
    assert_eq!(circuit.layout, layout(&ast));
    assert_eq!(circuit.steps, sequence_steps(&ast, &validated.variables));
}

#[test]
fn test_evaluate_by_hand() {
    let ast = parse_expression("a xnor (b or c)").unwrap();
    let assignment: Assignment = [('a', true), ('b', false), ('c', true)].into();
    assert_eq!(ast.evaluate(&assignment), Ok(true));
}

// ========== Validation ==========

#[test]
fn test_empty_expression() {
    assert_eq!(validation_error("   "), ValidationError::EmptyExpression);
    assert_eq!(
        validation_error("").to_string(),
        "Expression cannot be empty"
    );
}

#[test]
fn test_invalid_variable_reported_verbatim() {
    assert_eq!(
        validation_error("a and xy"),
        ValidationError::InvalidVariable("xy".to_string())
    );
    assert_eq!(
        validation_error("a or 1"),
        ValidationError::InvalidVariable("1".to_string())
    );
}

#[test]
fn test_balance_errors() {
    assert_eq!(validation_error("(a and b"), ValidationError::MismatchedParentheses);
    assert_eq!(validation_error("a and b)"), ValidationError::MismatchedParentheses);
    assert_eq!(validation_error(")a("), ValidationError::MismatchedParentheses);
}

#[test]
fn test_arity_errors() {
    let and = Operator::Binary(BinaryOp::And);
    assert_eq!(validation_error("and a"), ValidationError::BinaryOperatorArity(and));
    assert_eq!(validation_error("a and"), ValidationError::BinaryOperatorArity(and));
    assert_eq!(validation_error("(a and) or b"), ValidationError::BinaryOperatorArity(and));
    assert_eq!(validation_error("not"), ValidationError::NotMissingOperand);
    assert_eq!(validation_error("not and a"), ValidationError::NotMissingOperand);
}

#[test]
fn test_operator_placement() {
    assert_eq!(
        validation_error("a and or b"),
        ValidationError::InvalidOperatorPlacement(Operator::Binary(BinaryOp::And))
    );
    assert_eq!(
        validation_error("a and not b"),
        ValidationError::InvalidOperatorPlacement(Operator::Binary(BinaryOp::And))
    );
    assert_eq!(
        validation_error("a xnor not (b or c)"),
        ValidationError::InvalidOperatorPlacement(Operator::Binary(BinaryOp::Xnor))
    );
    assert!(Circuit::compile("a and (not b)").is_ok());
}

#[test]
fn test_normalized_text_recompiles() {
    for input in ["not a and b", "a and (not b)", "c or (not (a nand b)) and (not c)"] {
        let circuit = Circuit::compile(input).unwrap();
        let again = Circuit::compile(&circuit.normalized).unwrap();
        assert_eq!(again.ast, circuit.ast, "{}", circuit.normalized);
    }
    let circuit = Circuit::compile("not a and b").unwrap();
    assert_eq!(circuit.normalized, "(not a) and b");
}

#[test]
fn test_missing_operator() {
    assert!(matches!(
        validation_error("a b"),
        ValidationError::MissingOperator { .. }
    ));
    assert_eq!(validation_error("a and ()"), ValidationError::EmptyParentheses);
}

#[test]
fn test_legality_checked_before_balance() {
    assert_eq!(
        validation_error("(a and bc"),
        ValidationError::InvalidVariable("bc".to_string())
    );
}

#[test]
fn test_case_folding() {
    let circuit = Circuit::compile("NOT A Or b").unwrap();
    assert_eq!(circuit.normalized, "(not a) or b");
    assert!(circuit
        .tokens
        .iter()
        .all(|t| t.text == t.text.to_lowercase()));
    assert_eq!(circuit.tokens[0].kind, TokenKind::Operator(Operator::Not));
}

// ========== Diagram and playback ==========

#[test]
fn test_layout_shape() {
    let circuit = Circuit::compile("(a and b) or (c and d)").unwrap();
    let kinds: Vec<NodeKind> = circuit.layout.nodes.iter().map(|n| n.kind).collect();
    assert_eq!(kinds.iter().filter(|&&k| k == NodeKind::Input).count(), 4);
    assert_eq!(kinds.iter().filter(|&&k| k == NodeKind::Gate).count(), 3);
    assert_eq!(kinds.last(), Some(&NodeKind::Output));
    assert_eq!(circuit.layout.connections.len(), 7);
}

#[test]
fn test_layout_is_deterministic() {
    let first = Circuit::compile("not (a xor b) nand c").unwrap();
    let second = Circuit::compile("not (a xor b) nand c").unwrap();
    assert_eq!(first.layout, second.layout);
}

#[test]
fn test_steps_reference_layout_ids() {
    let circuit = Circuit::compile("a and (not b) or c").unwrap();
    for step in &circuit.steps {
        for id in &step.active_component_ids {
            let known = circuit.layout.node(id.as_str()).is_some()
                || circuit.layout.connection(id.as_str()).is_some();
            assert!(known, "unknown id {} in step '{}'", id, step.title);
        }
    }
}

#[test]
fn test_steps_titles() {
    let circuit = Circuit::compile("a and (not b) or c").unwrap();
    let titles: Vec<&str> = circuit.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Input Initialization",
            "Expression Decoding",
            "NOT Operation",
            "AND Operation",
            "OR Operation",
            "Result Output",
        ]
    );
}

#[test]
fn test_circuit_serializes_to_json() {
    let circuit = Circuit::compile("a or (not b)").unwrap();
    let value = serde_json::to_value(&circuit).unwrap();
    assert_eq!(value["normalized"], "a or (not b)");
    assert_eq!(value["ast"]["type"], "gate");
    assert_eq!(value["ast"]["op"], "or");
    assert_eq!(value["layout"]["nodes"][0]["kind"], "input");
    assert_eq!(value["layout"]["nodes"][0]["id"], "input-root-0");
    assert_eq!(value["gates"][0]["operator"], "or");
}
