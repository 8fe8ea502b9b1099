use jsonld_rdf::{
	literal_to_value,
	nquads::{self, ParseError},
	object_to_rdf, Dataset, GraphMap, Item, Literal, NativeValue, Node, NodeMap, NodeObject,
	Options, Subject, Triple, UniqueNamer, DEFAULT_GRAPH, RDF_FIRST, RDF_NIL, RDF_REST, XSD_DOUBLE,
	XSD_INTEGER,
};

const EX_S: &str = "http://example.org/s";
const EX_P: &str = "http://example.org/p";

fn triple(subject: Subject, object: impl Into<Node>) -> Triple {
	Triple::new(subject, EX_P, object)
}

fn sample_triples() -> Vec<(&'static str, Triple)> {
	vec![
		(
			DEFAULT_GRAPH,
			triple(Subject::iri(EX_S), Literal::string("tab\there")),
		),
		(
			DEFAULT_GRAPH,
			triple(Subject::blank("_:b0"), Node::iri("http://example.org/o")),
		),
		(
			"http://example.org/g",
			triple(Subject::iri(EX_S), Literal::lang_string("bonjour", "fr")),
		),
		(
			"_:g0",
			triple(
				Subject::blank("_:b1"),
				Literal::new("1.5E0", XSD_DOUBLE.as_str()),
			),
		),
	]
}

#[test]
fn write_then_parse() {
	let mut dataset = Dataset::new();
	for (graph, triple) in sample_triples() {
		dataset.insert(graph, triple);
	}

	let parsed: Dataset = nquads::to_nquads(&dataset).parse().unwrap();
	assert_eq!(parsed, dataset)
}

#[test]
fn canonical_output_ignores_insertion_order() {
	let mut forward = Dataset::new();
	for (graph, triple) in sample_triples() {
		forward.insert(graph, triple);
	}

	let mut backward = Dataset::new();
	for (graph, triple) in sample_triples().into_iter().rev() {
		backward.insert(graph, triple);
	}

	assert_eq!(nquads::to_nquads(&forward), nquads::to_nquads(&backward));
	assert_eq!(
		nquads::to_normalized_nquads(&forward, "_:b0"),
		nquads::to_normalized_nquads(&backward, "_:b0")
	)
}

#[test]
fn list_encoding() {
	let items: Vec<_> = ["a", "b", "c", "d"].into_iter().map(Item::value).collect();

	let mut graph = NodeMap::new();
	graph.insert(
		EX_S.to_owned(),
		NodeObject::new(EX_S).with(EX_P, Item::list(items.clone())),
	);

	let mut graphs = GraphMap::new();
	graphs.insert(DEFAULT_GRAPH.to_owned(), graph);

	let dataset = Dataset::from_graph_map(&graphs, &mut UniqueNamer::default());
	let graph = dataset.default_graph().unwrap();
	assert_eq!(graph.len(), 2 * items.len() + 1);

	let object = |s: &Node, p: &str| {
		graph
			.iter()
			.find(|t| Node::from(t.subject.clone()) == *s && t.predicate == p)
			.map(|t| t.object.clone())
			.unwrap()
	};

	let mut values = Vec::new();
	let mut node = object(&Node::iri(EX_S), EX_P);
	while node != Node::iri(RDF_NIL.as_str()) {
		let value = object(&node, RDF_FIRST.as_str());
		values.push(value.as_literal().unwrap().lexical.clone());
		node = object(&node, RDF_REST.as_str());
	}

	assert_eq!(values, ["a", "b", "c", "d"])
}

#[test]
fn empty_list() {
	let mut graph = NodeMap::new();
	graph.insert(
		EX_S.to_owned(),
		NodeObject::new(EX_S).with(EX_P, Item::list([])),
	);

	let mut graphs = GraphMap::new();
	graphs.insert(DEFAULT_GRAPH.to_owned(), graph);

	let dataset = Dataset::from_graph_map(&graphs, &mut UniqueNamer::default());
	assert_eq!(
		nquads::to_nquads(&dataset),
		"<http://example.org/s> <http://example.org/p> <http://www.w3.org/1999/02/22-rdf-syntax-ns#nil> .\n"
	)
}

#[test]
fn deduplication() {
	let dataset: Dataset = concat!(
		"<http://example.org/s> <http://example.org/p> \"v\" .\n",
		"<http://example.org/s>  <http://example.org/p>\t\"v\"^^<http://www.w3.org/2001/XMLSchema#string> .\n",
	)
	.parse()
	.unwrap();

	assert_eq!(dataset.default_graph().unwrap().len(), 1)
}

#[test]
fn native_literals() {
	let mut namer = UniqueNamer::default();
	let options = Options::native_types();

	let integer = object_to_rdf(&Item::value(42i64), &mut namer).unwrap();
	let integer = integer.as_literal().unwrap();
	assert_eq!(integer.lexical, "42");
	assert_eq!(integer.datatype, XSD_INTEGER.as_str());
	assert_eq!(
		literal_to_value(integer, options).value,
		NativeValue::Integer(42)
	);

	let double = object_to_rdf(&Item::value(1.5), &mut namer).unwrap();
	let double = double.as_literal().unwrap();
	assert_eq!(double.lexical, "1.5E0");
	assert_eq!(double.datatype, XSD_DOUBLE.as_str());
	assert_eq!(
		literal_to_value(double, options).value,
		NativeValue::Double(1.5)
	);

	// Without native types, the lexical form is kept along with its datatype.
	let value = literal_to_value(integer, Options::default());
	assert_eq!(value.value, NativeValue::String("42".to_owned()));
	assert_eq!(value.type_.as_deref(), Some(XSD_INTEGER.as_str()))
}

#[test]
fn escaping() {
	let value = "say \"hi\"\nthen leave";

	let mut dataset = Dataset::new();
	dataset.insert(
		DEFAULT_GRAPH,
		triple(Subject::iri(EX_S), Literal::string(value)),
	);

	let output = nquads::to_nquads(&dataset);
	assert_eq!(
		output,
		"<http://example.org/s> <http://example.org/p> \"say \\\"hi\\\"\\nthen leave\" .\n"
	);

	let parsed: Dataset = output.parse().unwrap();
	let (_, triple) = parsed.quads().next().unwrap();
	assert_eq!(triple.object.as_literal().unwrap().lexical, value)
}

#[test]
fn default_graph() {
	let mut dataset = Dataset::new();
	dataset.insert(
		DEFAULT_GRAPH,
		triple(Subject::iri(EX_S), Node::iri("http://example.org/o")),
	);

	let output = nquads::to_nquads(&dataset);
	assert_eq!(
		output,
		"<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
	);

	let parsed: Dataset = output.parse().unwrap();
	assert_eq!(parsed.graph_names().collect::<Vec<_>>(), [DEFAULT_GRAPH])
}

#[test]
fn error_names_the_offending_line() {
	let input = concat!(
		"<http://example.org/s> <http://example.org/p> \"1\" .\n",
		"<http://example.org/s> <http://example.org/p> \"2\" .\n",
		"not a valid quad\n",
		"<http://example.org/s> <http://example.org/p> \"4\" .\n",
		"<http://example.org/s> <http://example.org/p> \"5\" .\n",
	);

	let error = input.parse::<Dataset>().unwrap_err();
	assert_eq!(error, ParseError { line: 3 });
	assert_eq!(error.to_string(), "invalid N-Quads statement at line 3")
}

#[test]
fn graph_without_triples_round_trips() {
	let mut graph = NodeMap::new();
	graph.insert(
		EX_S.to_owned(),
		NodeObject::new(EX_S).with("@index", Item::value("ignored")),
	);

	let mut graphs = GraphMap::new();
	graphs.insert("urn:g".to_owned(), graph);

	let dataset = Dataset::from_graph_map(&graphs, &mut UniqueNamer::default());
	let output = nquads::to_nquads(&dataset);
	assert_eq!(output, "");

	let parsed: Dataset = output.parse().unwrap();
	assert_eq!(parsed, dataset)
}

#[test]
fn blank_graph_keeps_its_node_identity() {
	let mut default = NodeMap::new();
	default.insert(
		"_:g".to_owned(),
		NodeObject::new("_:g").with(EX_P, Item::value("v")),
	);

	let mut named = NodeMap::new();
	named.insert(
		EX_S.to_owned(),
		NodeObject::new(EX_S).with(EX_P, Item::value("w")),
	);

	let mut graphs = GraphMap::new();
	graphs.insert(DEFAULT_GRAPH.to_owned(), default);
	graphs.insert("_:g".to_owned(), named);

	let dataset = Dataset::from_graph_map(&graphs, &mut UniqueNamer::default());
	assert_eq!(
		nquads::to_nquads(&dataset),
		concat!(
			"<http://example.org/s> <http://example.org/p> \"w\" _:t0 .\n",
			"_:t0 <http://example.org/p> \"v\" .\n",
		)
	)
}
