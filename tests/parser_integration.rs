//! Black-box lex -> parse -> serialize pipeline tests, one per `spec.md`
//! §8 end-to-end scenario.

use adelec::grammar::{self, GrammarError};
use adelec::lexer::Lexer;
use adelec::model::Action;
use adelec::{serializer, translate};

fn parse(source: &str) -> Result<Option<adelec::Scenario>, GrammarError> {
    let tokens = Lexer::lex(source).expect("these sources lex cleanly");
    grammar::parse(&tokens)
}

#[test]
fn empty_source_produces_no_output() {
    assert_eq!(translate("", "xml").unwrap(), None);
}

#[test]
fn empty_scenario_has_both_fields_absent_and_serializes_to_the_minimal_shape() {
    let scenario = parse("scenario { }").unwrap().unwrap();
    assert!(scenario.configuration.is_none());
    assert!(scenario.attack.is_none());

    let xml = translate("scenario { }", "xml").unwrap().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<Scenario entity=\"object\">\n"));
}

#[test]
fn configuration_block_records_actions_in_lexical_order_and_serializes_as_a_list() {
    let source = r#"
        scenario {
            configuration { setUnitTime("s"); setTimeStart(0); }
        }
    "#;
    let scenario = parse(source).unwrap().unwrap();
    let actions = scenario.configuration.clone().unwrap().actions;
    assert_eq!(actions.len(), 2);
    assert!(matches!(&actions[0], Action::SetUnitTime(a) if a.reference == "_s"));
    assert!(matches!(&actions[1], Action::SetTimeStart(a) if a.reference == "_0"));

    let xml = serializer::interpret(&scenario, "xml").unwrap();
    assert!(xml.contains("<actions entity=\"attribute\" type=\"list\" length=\"2\">"));
    assert!(xml.contains("index=\"0\""));
    assert!(xml.contains("index=\"1\""));
}

#[test]
fn negative_time_start_cites_the_offending_line() {
    let source = "scenario {\n  configuration { setTimeStart(-0.5); }\n}";
    let err = parse(source).unwrap_err();
    match err {
        GrammarError::InvalidArgument { line, .. } => assert_eq!(line, 2),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn duplicate_identifier_on_one_declaration_line_cites_its_line() {
    let source = "scenario {\n  attack { integer x, x; }\n}";
    let err = parse(source).unwrap_err();
    match err {
        GrammarError::DuplicateIdentifier { line, .. } => assert_eq!(line, 2),
        other => panic!("expected DuplicateIdentifier, got {other:?}"),
    }
}

#[test]
fn shadowing_across_nested_attack_blocks_is_forbidden() {
    let source = "scenario { attack { integer y; attack { integer y; } } }";
    let err = parse(source).unwrap_err();
    assert!(matches!(err, GrammarError::DuplicateIdentifier { .. }));
}

#[test]
fn unknown_interpreter_is_reported_by_the_serializer_facade() {
    let err = translate("scenario { }", "yaml").unwrap_err();
    assert_eq!(err.to_string(), "the interpreter 'yaml' is unknown");
}
