use indoc::indoc;
use shapegen_core::{Grammar, GrammarNode, RuleDef};

use crate::model::TypeModel;
use crate::shape::{ContainerKind, Shape};
use crate::test_utils::{grammar, ref_rule, rule};

#[test]
fn rule_with_single_reference() {
    let g = Grammar::new("t").with_rule("foo", ref_rule("bar"));
    let model = TypeModel::generate(&g);
    assert_eq!(model.get("foo"), Some(&Shape::rule("bar")));
}

#[test]
fn alternatives_form_choice() {
    let g = Grammar::new("t").with_rule(
        "value",
        rule(vec![
            GrammarNode::alt(vec![GrammarNode::rule_ref("a")]),
            GrammarNode::alt(vec![GrammarNode::rule_ref("b")]),
            GrammarNode::alt(vec![GrammarNode::rule_ref("c")]),
        ]),
    );
    let model = TypeModel::generate(&g);
    assert_eq!(
        model.get("value"),
        Some(&Shape::Choice(vec![
            Shape::rule("a"),
            Shape::rule("b"),
            Shape::rule("c"),
        ]))
    );
}

#[test]
fn null_alternatives_are_skipped() {
    let g = Grammar::new("t").with_rule(
        "item",
        RuleDef::new(vec![
            None,
            Some(GrammarNode::alt(vec![GrammarNode::rule_ref("x")])),
            None,
        ]),
    );
    let model = TypeModel::generate(&g);
    assert_eq!(model.get("item"), Some(&Shape::rule("x")));
}

#[test]
fn rules_without_alternatives_are_absent() {
    let g = Grammar::new("t")
        .with_rule("empty", RuleDef::default())
        .with_rule("nulls", RuleDef::new(vec![None, None]))
        .with_rule("kept", ref_rule("k"));
    let model = TypeModel::generate(&g);
    assert_eq!(model.len(), 1);
    assert!(model.get("empty").is_none());
    assert!(model.get("nulls").is_none());
}

#[test]
fn terminal_only_rule_is_empty() {
    let g = Grammar::new("t").with_rule(
        "semi",
        rule(vec![GrammarNode::alt(vec![GrammarNode::terminal("';'")])]),
    );
    let model = TypeModel::generate(&g);
    assert_eq!(model.get("semi"), Some(&Shape::Empty));
}

#[test]
fn declaration_order_is_preserved() {
    let g = grammar(indoc! {r#"
        {
          "name": "order",
          "rules": {
            "zeta": { "type": "SYMBOL", "name": "alpha" },
            "alpha": { "type": "STRING", "value": "a" },
            "mid": { "type": "SYMBOL", "name": "zeta" }
          }
        }
    "#});
    let model = TypeModel::generate(&g);
    let names: Vec<_> = model.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn generates_from_json_grammar() {
    let g = grammar(indoc! {r#"
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
                { "type": "SYMBOL", "name": "binary" }
              ]
            },
            "binary": {
              "type": "PREC_LEFT",
              "value": 1,
              "content": {
                "type": "SEQ",
                "members": [
                  { "type": "FIELD", "name": "left", "content": { "type": "SYMBOL", "name": "expression" } },
                  { "type": "STRING", "value": "+" },
                  { "type": "FIELD", "name": "right", "content": { "type": "SYMBOL", "name": "expression" } }
                ]
              }
            },
            "number": { "type": "PATTERN", "value": "\\d+" }
          }
        }
    "#});
    let model = TypeModel::generate(&g);

    assert_eq!(
        model.get("program"),
        Some(&Shape::container(ContainerKind::List, Shape::rule("statement")))
    );
    assert_eq!(model.get("statement"), Some(&Shape::rule("expression")));
    assert_eq!(
        model.get("binary"),
        Some(&Shape::Sequence(vec![
            Shape::rule("expression"),
            Shape::rule("expression"),
        ]))
    );
    assert_eq!(model.get("number"), Some(&Shape::Empty));
}

#[test]
fn generation_is_deterministic() {
    let g = Grammar::new("t").with_rule(
        "pair",
        rule(vec![GrammarNode::alt(vec![
            GrammarNode::rule_ref("k"),
            GrammarNode::optional(vec![GrammarNode::rule_ref("v")]),
        ])]),
    );
    assert_eq!(TypeModel::generate(&g), TypeModel::generate(&g));
}

#[test]
fn records_follow_model_order() {
    let g = Grammar::new("t")
        .with_rule("b", ref_rule("a"))
        .with_rule("a", rule(vec![GrammarNode::alt(vec![GrammarNode::terminal("x")])]));
    let records = TypeModel::generate(&g).records();
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn serializes_as_map() {
    let model: TypeModel = [
        ("foo".to_string(), Shape::rule("bar")),
        ("baz".to_string(), Shape::Empty),
    ]
    .into_iter()
    .collect();
    let json = serde_json::to_string(&model).unwrap();
    insta::assert_snapshot!(json, @r#"{"foo":{"Rule":"bar"},"baz":"Empty"}"#);
}
