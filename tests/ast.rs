//! Tree model tests: builder, accessors, Display, and JSON export.

mod common;

use common::{assert_tree_roundtrip, parse_clean};
use ycl::{Assign, Block, Expr, File, Statement};

// -----------------------------------------------------------
// Builder.
// -----------------------------------------------------------

#[test]
fn builder_matches_parsed_tree() {
    let built = File::new()
        .assign("name", Expr::string("YCL"))
        .block(
            Block::new("server")
                .assign("port", 8080u64)
                .assign("tls", false)
                .assign("hosts", vec![Expr::string("a"), Expr::string("b")]),
        )
        .assign("alias", Expr::ident("name"));

    let parsed = parse_clean(
        "name = 'YCL'\n\
         server { port = 8080, tls = false, hosts = ['a', 'b'] }\n\
         alias = name",
    );
    assert_eq!(built, parsed);
}

#[test]
fn builder_statement_passthrough() {
    let file = File::new().statement(Statement::Assign(Assign {
        name: "x".to_string(),
        value: Expr::Null,
    }));
    assert_eq!(file, File::new().assign("x", Expr::Null));
}

#[test]
fn block_from_conversion() {
    let statement: Statement = Block::new("empty").into();
    assert_eq!(statement.name(), "empty");
    assert!(statement.as_assign().is_none());
    assert!(statement.as_block().is_some_and(|b| b.body.is_empty()));
}

// -----------------------------------------------------------
// Display of values.
// -----------------------------------------------------------

#[test]
fn display_expr_variants() {
    assert_eq!(Expr::string("hi").to_string(), "'hi'");
    assert_eq!(Expr::template("$(a)").to_string(), "`$(a)`");
    assert_eq!(Expr::number("007").to_string(), "007");
    assert_eq!(Expr::Bool(true).to_string(), "true");
    assert_eq!(Expr::Null.to_string(), "null");
    assert_eq!(Expr::ident("x").to_string(), "x");
    assert_eq!(
        Expr::array([Expr::Null, Expr::array([Expr::Bool(false)])]).to_string(),
        "[null, [false]]"
    );
}

#[test]
fn expr_kind_names() {
    let names: Vec<_> = [
        Expr::string(""),
        Expr::template(""),
        Expr::number("1"),
        Expr::Bool(true),
        Expr::Null,
        Expr::Array(Vec::new()),
        Expr::ident("a"),
    ]
    .iter()
    .map(Expr::kind_name)
    .collect();
    assert_eq!(
        names,
        vec!["string", "template", "number", "bool", "null", "array", "ident"]
    );
}

// -----------------------------------------------------------
// JSON export.
// -----------------------------------------------------------

#[test]
fn json_shape() {
    let file = parse_clean("a = [1, 'x', null]\nb { c = true }");
    let value = serde_json::to_value(&file).expect("serialize");
    let expected = serde_json::json!({
        "statements": [
            { "assign": { "name": "a", "value": { "array": [
                { "number": "1" },
                { "string": "x" },
                "null"
            ] } } },
            { "block": { "name": "b", "body": [
                { "assign": { "name": "c", "value": { "bool": true } } }
            ] } }
        ]
    });
    assert_eq!(value, expected);
}

// -----------------------------------------------------------
// Tree round-trips through the formatter.
// -----------------------------------------------------------

#[test]
fn roundtrip_every_value_kind() {
    assert_tree_roundtrip(
        &File::new()
            .assign("s", Expr::string(r"escaped \' quote and \n newline"))
            .assign("t", Expr::template("Hello $(my_object.field1) World!"))
            .assign("n", Expr::number("0"))
            .assign("yes", true)
            .assign("no", false)
            .assign("nothing", Expr::Null)
            .assign("r", Expr::ident("$env"))
            .assign("empty", Expr::Array(Vec::new())),
    );
}

#[test]
fn roundtrip_nested_blocks() {
    assert_tree_roundtrip(
        &File::new().block(
            Block::new("a")
                .block(Block::new("b").block(Block::new("c")))
                .assign("d", Expr::array([Expr::array([Expr::Null])])),
        ),
    );
}

#[test]
fn roundtrip_multiline_literals() {
    assert_tree_roundtrip(
        &File::new()
            .assign("s", Expr::string("line one\nline two"))
            .assign("t", Expr::template("a\n\tb")),
    );
}
