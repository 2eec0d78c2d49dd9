#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_lex_graphql_frontend(bench: &mut Bencher) {
    use graphql_frontend::ast::lex;
    bench.iter(|| lex(QUERY).ok());
}

fn graphql_ast_parse_graphql_frontend(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, QUERY).ok();
    });
}

fn graphql_ast_parse_graphql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    bench.iter(|| {
        parse_query::<&str>(EXECUTABLE_QUERY).ok();
    });
}

fn graphql_ast_parse_executable_graphql_frontend(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, EXECUTABLE_QUERY).ok();
    });
}

fn graphql_ast_print_graphql_frontend(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| ast.print());
}

fn graphql_ast_print_gql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    let ast = parse_query::<&str>(EXECUTABLE_QUERY).ok().unwrap();
    bench.iter(|| ast.to_string());
}

benchmark_group!(
    parse,
    graphql_lex_graphql_frontend,
    graphql_ast_parse_graphql_frontend,
    graphql_ast_parse_graphql_parser,
    graphql_ast_parse_executable_graphql_frontend,
    graphql_ast_print_graphql_frontend,
    graphql_ast_print_gql_parser
);

benchmark_main!(parse);

static QUERY: &str = include_str!("../fixture/kitchen_sink.graphql");

// graphql-parser's query parser rejects type definitions, so the comparisons only use operations
static EXECUTABLE_QUERY: &str = r#"
query queryName($foo: ComplexType, $site: Site = MOBILE) @onQuery {
  whoever123is: node(id: [123, 456]) {
    id
    ... on User @onInlineFragment {
      field2 {
        id
        alias: field1(first: 10, after: $foo) @include(if: $foo) {
          id
          ...frag @onFragmentSpread
        }
      }
    }
  }
}

fragment frag on Friend @onFragmentDefinition {
  foo(size: $site, bar: 12, obj: {key: "value", block: """block string"""})
}
"#;
