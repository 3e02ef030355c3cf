use std::collections::HashSet;

use indoc::indoc;
use shapegen_core::{Grammar, GrammarNode};

use crate::emit::{Emitter, emit_shapes};
use crate::model::TypeModel;
use crate::render::{Dialect, RenderConfig, Renderer};
use crate::test_utils::{grammar, records, ref_rule, rule};

const CALC: &str = indoc! {r#"
    {
      "name": "calc",
      "rules": {
        "program": {
          "type": "REPEAT",
          "content": { "type": "SYMBOL", "name": "statement" }
        },
        "statement": {
          "type": "SEQ",
          "members": [
            { "type": "SYMBOL", "name": "expression" },
            { "type": "STRING", "value": ";" }
          ]
        },
        "expression": {
          "type": "CHOICE",
          "members": [
            { "type": "SYMBOL", "name": "number" },
            { "type": "SYMBOL", "name": "call" },
            { "type": "SYMBOL", "name": "binary" }
          ]
        },
        "binary": {
          "type": "SEQ",
          "members": [
            { "type": "SYMBOL", "name": "expression" },
            { "type": "STRING", "value": "+" },
            { "type": "SYMBOL", "name": "expression" }
          ]
        },
        "call": {
          "type": "SEQ",
          "members": [
            { "type": "SYMBOL", "name": "identifier" },
            { "type": "STRING", "value": "(" },
            {
              "type": "CHOICE",
              "members": [
                { "type": "SYMBOL", "name": "arguments" },
                { "type": "BLANK" }
              ]
            },
            { "type": "STRING", "value": ")" }
          ]
        },
        "arguments": {
          "type": "SEQ",
          "members": [
            { "type": "SYMBOL", "name": "expression" },
            {
              "type": "REPEAT",
              "content": {
                "type": "SEQ",
                "members": [
                  { "type": "STRING", "value": "," },
                  { "type": "SYMBOL", "name": "expression" }
                ]
              }
            }
          ]
        },
        "identifier": { "type": "PATTERN", "value": "[a-z]+" },
        "number": { "type": "PATTERN", "value": "\\d+" }
      }
    }
"#};

#[test]
fn generic_records() {
    insta::assert_snapshot!(records(CALC, RenderConfig::new()), @r"
    record program(statement: List<statement>)

    record statement(expression: expression)

    record expression(ast: Sum<number, Sum<call, binary>>)

    record binary(expression: expression, expression1: expression)

    record call(identifier: identifier, arguments: Optional<arguments>)

    record arguments(expression: expression, expression1: List<expression>)

    record identifier(value: String)

    record number(value: String)
    ");
}

#[test]
fn scala_records() {
    let config = RenderConfig::new().dialect(Dialect::Scala);
    insta::assert_snapshot!(records(CALC, config), @r"
    case class program (statement: List[statement])

    case class statement (expression: expression)

    case class expression (ast: Either[number,Either[call,binary]])

    case class binary (expression: expression, expression1: expression)

    case class call (identifier: identifier, arguments: Option[arguments])

    case class arguments (expression: expression, expression1: List[expression])

    case class identifier (value: String)

    case class number (value: String)
    ");
}

#[test]
fn rust_records_box_cycles() {
    let config = RenderConfig::new().dialect(Dialect::Rust).derives(["Debug"]);
    insta::assert_snapshot!(records(CALC, config), @r"
    #[derive(Debug)]
    pub struct Program {
        pub statement: Vec<Statement>,
    }

    #[derive(Debug)]
    pub struct Statement {
        pub expression: Box<Expression>,
    }

    #[derive(Debug)]
    pub struct Expression {
        pub ast: Either<Number, Either<Box<Call>, Box<Binary>>>,
    }

    #[derive(Debug)]
    pub struct Binary {
        pub expression: Box<Expression>,
        pub expression1: Box<Expression>,
    }

    #[derive(Debug)]
    pub struct Call {
        pub identifier: Identifier,
        pub arguments: Option<Box<Arguments>>,
    }

    #[derive(Debug)]
    pub struct Arguments {
        pub expression: Box<Expression>,
        pub expression1: Vec<Box<Expression>>,
    }

    #[derive(Debug)]
    pub struct Identifier {
        pub value: String,
    }

    #[derive(Debug)]
    pub struct Number {
        pub value: String,
    }
    ");
}

#[test]
fn header_names_grammar() {
    let g = grammar(CALC);
    let model = TypeModel::generate(&g);
    let out = Emitter::new(&model, RenderConfig::new())
        .source(&g.name)
        .emit();
    let first_lines: Vec<_> = out.lines().take(3).collect();
    assert_eq!(
        first_lines,
        [
            "// Generated by shapegen from grammar `calc`.",
            "",
            "record program(statement: List<statement>)",
        ]
    );
}

#[test]
fn header_without_source() {
    let g = Grammar::new("t").with_rule("foo", ref_rule("bar"));
    let model = TypeModel::generate(&g);
    let out = Emitter::new(&model, RenderConfig::new()).emit();
    assert_eq!(out, "// Generated by shapegen.\n\nrecord foo(bar: bar)\n");
}

#[test]
fn empty_model_emits_only_header() {
    let model = TypeModel::default();
    assert_eq!(Emitter::new(&model, RenderConfig::new()).emit(), "// Generated by shapegen.\n");
    assert_eq!(Emitter::new(&model, RenderConfig::new().header(false)).emit(), "");
}

#[test]
fn single_reference_rule() {
    let g = Grammar::new("t").with_rule("foo", ref_rule("bar"));
    let model = TypeModel::generate(&g);
    let out = Emitter::new(&model, RenderConfig::new().header(false)).emit();
    assert_eq!(out, "record foo(bar: bar)\n");
}

#[test]
fn shapes_listing() {
    let model = TypeModel::generate(&grammar(CALC));
    insta::assert_snapshot!(emit_shapes(&model, RenderConfig::new()), @r"
    program = List<statement>
    statement = expression
    expression = Sum<number, Sum<call, binary>>
    binary = (expression, expression)
    call = (identifier, Optional<arguments>)
    arguments = (expression, List<expression>)
    identifier = String
    number = String
    ");
}

#[test]
fn shapes_listing_in_scala() {
    let g = Grammar::new("t").with_rule(
        "pair",
        rule(vec![GrammarNode::alt(vec![
            GrammarNode::rule_ref("key"),
            GrammarNode::terminal("':'"),
            GrammarNode::zero_or_more(vec![GrammarNode::rule_ref("value")]),
        ])]),
    );
    let model = TypeModel::generate(&g);
    let out = emit_shapes(&model, RenderConfig::new().dialect(Dialect::Scala));
    assert_eq!(out, "pair = ( key, List[value] )\n");
}

const MIXED_NAMES: &str = indoc! {r#"
    {
      "name": "mixed",
      "rules": {
        "_expression": {
          "type": "CHOICE",
          "members": [
            { "type": "SYMBOL", "name": "pair" },
            { "type": "SYMBOL", "name": "node" }
          ]
        },
        "expression": { "type": "SYMBOL", "name": "_expression" },
        "pair": {
          "type": "SEQ",
          "members": [
            { "type": "SYMBOL", "name": "fooBar" },
            { "type": "SYMBOL", "name": "foo_bar" },
            { "type": "SYMBOL", "name": "node" },
            { "type": "SYMBOL", "name": "node_" }
          ]
        },
        "fooBar": { "type": "PATTERN", "value": "[a-z]+" },
        "foo_bar": { "type": "PATTERN", "value": "[A-Z]+" },
        "node": { "type": "STRING", "value": "node" },
        "node_": { "type": "STRING", "value": "node_" }
      }
    }
"#};

fn assert_distinct(names: &[String], what: &str) {
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len(), "duplicate {what}: {names:?}");
}

#[test]
fn rendered_identifiers_are_distinct() {
    let model = TypeModel::generate(&grammar(MIXED_NAMES));
    for dialect in Dialect::ALL {
        let config = RenderConfig::new().dialect(dialect).reserve(["node"]);
        let renderer = Renderer::new(config).with_rules(model.iter().map(|(rule, _)| rule));
        let types: Vec<String> = model.iter().map(|(rule, _)| renderer.type_name(rule)).collect();
        assert_distinct(&types, "type names");
        for record in model.records() {
            assert_distinct(&renderer.field_names(&record), "field names");
        }
    }
}

#[test]
fn rust_output_declares_each_struct_and_field_once() {
    let out = records(MIXED_NAMES, RenderConfig::new().dialect(Dialect::Rust));

    let structs: Vec<String> = out
        .lines()
        .filter_map(|line| line.strip_prefix("pub struct "))
        .map(str::to_string)
        .collect();
    assert_distinct(&structs, "structs");

    for body in out.split("pub struct ").skip(1) {
        let fields: Vec<String> = body
            .lines()
            .filter_map(|line| line.trim().strip_prefix("pub "))
            .filter_map(|line| line.split(':').next())
            .map(str::to_string)
            .collect();
        assert_distinct(&fields, "fields");
    }

    assert!(out.contains("pub struct Expression {"));
    assert!(out.contains("pub struct Expression1 {"));
    assert!(out.contains("pub foo_bar1: FooBar1,"));
}
