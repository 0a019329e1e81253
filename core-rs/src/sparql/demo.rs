//! Demo SPARQL templates used by the test operations.
//!
//! **Not a query builder.** Values are pasted into the SPARQL text verbatim:
//! a URI containing `>` or a label containing `'` changes the meaning of the
//! query. Only use these with trusted, fixed inputs such as the demo
//! individual. Production paths take finished query text instead.
//!
//! The output is byte-for-byte stable, including the whitespace of the
//! multi-line templates, so recorded fixtures keep matching.

use crate::sparql::SparqlQuery;

pub const VIVO_CORE_PREFIX: &str = "PREFIX vivo: <http://vivoweb.org/ontology/core#>";

/// Individual used by the demo create/update/delete operations
pub const DEMO_INDIVIDUAL_URI: &str = "http://example.org/individual/n123";
pub const DEMO_LABEL: &str = "New person";
pub const DEMO_NEW_LABEL: &str = "Modified person";

const BODY_INDENT: usize = 24;
const GRAPH_INDENT: usize = 28;
const TRIPLE_INDENT: usize = 32;
const CLOSING_INDENT: usize = 20;

/// `INSERT DATA` of one labelled individual into `graph`
pub fn insert_individual(graph: &str, individual_uri: &str, label: &str) -> SparqlQuery {
    SparqlQuery::new(format!(
        "{VIVO_CORE_PREFIX} INSERT DATA {{ GRAPH <{graph}> {{ <{individual_uri}> vivo:label '{label}' . }} }}"
    ))
}

/// Every triple of `graph`
pub fn select_graph(graph: &str) -> SparqlQuery {
    SparqlQuery::new(format!(
        "{VIVO_CORE_PREFIX} SELECT ?s ?p ?o WHERE {{ GRAPH <{graph}> {{ ?s ?p ?o }} }}"
    ))
}

/// Replace whatever label `individual_uri` has in `graph` with `new_label`
pub fn replace_label(graph: &str, individual_uri: &str, new_label: &str) -> SparqlQuery {
    let mut lines = vec![(BODY_INDENT, format!("{VIVO_CORE_PREFIX} "))];
    lines.extend(graph_clause("DELETE", graph, &old_label_pattern(individual_uri), true));
    lines.extend(graph_clause(
        "INSERT",
        graph,
        &format!("<{individual_uri}> vivo:label '{new_label}' . "),
        true,
    ));
    lines.extend(graph_clause("WHERE", graph, &old_label_pattern(individual_uri), false));

    SparqlQuery::new(layout(&lines))
}

/// Remove every label of `individual_uri` in `graph`
pub fn delete_label(graph: &str, individual_uri: &str) -> SparqlQuery {
    let mut lines = vec![(BODY_INDENT, format!("{VIVO_CORE_PREFIX} "))];
    lines.extend(graph_clause("DELETE", graph, &old_label_pattern(individual_uri), true));
    lines.extend(graph_clause("WHERE", graph, &old_label_pattern(individual_uri), false));

    SparqlQuery::new(layout(&lines))
}

fn old_label_pattern(individual_uri: &str) -> String {
    format!("<{individual_uri}> vivo:label ?oldLabel . ")
}

/// `KEYWORD { GRAPH <g> { triple } }` spread over five indented lines.
/// Only the last clause of a template closes without a trailing space.
fn graph_clause(keyword: &str, graph: &str, triple: &str, more_follow: bool) -> Vec<(usize, String)> {
    let closing = if more_follow { "} " } else { "}" };
    vec![
        (BODY_INDENT, format!("{keyword} {{ ")),
        (GRAPH_INDENT, format!("GRAPH <{graph}> {{ ")),
        (TRIPLE_INDENT, triple.to_string()),
        (GRAPH_INDENT, "} ".to_string()),
        (BODY_INDENT, closing.to_string()),
    ]
}

fn layout(lines: &[(usize, String)]) -> String {
    let mut out = String::from("\n");
    for (indent, text) in lines {
        out.push_str(&" ".repeat(*indent));
        out.push_str(text);
        out.push('\n');
    }
    out.push_str(&" ".repeat(CLOSING_INDENT));
    out
}
