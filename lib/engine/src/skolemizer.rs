use rdf_skolem_model::{BlankNode, Dataset, GraphName, NamedNode, Quad, Subject, Term};
use rustc_hash::FxHashMap;
use tracing::debug;
use uuid::Uuid;

/// URN namespace of freshly minted skolem IRIs.
///
/// The suffix is a random UUID, so the resulting IRIs are globally unique without any
/// coordination across processor instances.
pub const SKOLEM_URN_PREFIX: &str = "urn:bn2nn-id:";

/// Replaces blank node terms of a [`Dataset`] with freshly minted named nodes.
///
/// Blank nodes are discovered through the subject position: every blank node that occurs as the
/// subject of at least one quad is assigned a new `urn:bn2nn-id:<uuid>` named node, and every
/// occurrence of that blank node anywhere in the dataset (subject, object or graph name) is
/// rewritten to it. A blank node that never occurs in subject position is not discovered and
/// passes through unchanged.
///
/// Each invocation builds its own blank-node-to-named-node mapping and discards it before
/// returning. Running the same dataset through [`Skolemizer::skolemize`] twice therefore yields
/// two unrelated sets of skolem IRIs.
///
/// Usage example:
/// ```
/// use rdf_skolem_engine::{Skolemizer, SKOLEM_URN_PREFIX};
/// use rdf_skolem_model::{BlankNode, Dataset, GraphName, NamedNode, Quad, Subject};
///
/// let quad = Quad::new(
///     BlankNode::new("b0")?,
///     NamedNode::new("http://example.com/p")?,
///     NamedNode::new("http://example.com/o")?,
///     GraphName::DefaultGraph,
/// );
/// let output = Skolemizer::new().skolemize(Dataset::from_iter([quad]));
///
/// let quad = output.iter().next().unwrap();
/// let Subject::NamedNode(subject) = &quad.subject else {
///     panic!("subject should have been skolemized");
/// };
/// assert!(subject.as_str().starts_with(SKOLEM_URN_PREFIX));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Skolemizer {
    namespace: &'static str,
}

impl Default for Skolemizer {
    fn default() -> Self {
        Self {
            namespace: SKOLEM_URN_PREFIX,
        }
    }
}

impl Skolemizer {
    /// Creates a skolemizer minting IRIs in the [`SKOLEM_URN_PREFIX`] namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a dataset in which every discovered blank node is consistently replaced by a
    /// freshly minted named node.
    ///
    /// The transformation is pure and synchronous: it performs no I/O, keeps no state across
    /// invocations and cannot fail. Named nodes, literals and the default graph marker are
    /// never inspected or altered.
    pub fn skolemize(&self, dataset: Dataset) -> Dataset {
        let mapping = self.resolve_blank_subjects(&dataset);
        if mapping.is_empty() {
            return dataset;
        }
        dataset
            .into_iter()
            .map(|quad| rewrite_quad(quad, &mapping))
            .collect()
    }

    /// Builds the per-invocation mapping from every blank node that occurs in subject position
    /// to a newly minted named node. One named node per distinct blank node value, regardless
    /// of how many quads share it.
    fn resolve_blank_subjects(&self, dataset: &Dataset) -> FxHashMap<BlankNode, NamedNode> {
        let mut mapping = FxHashMap::default();
        for quad in dataset {
            let Subject::BlankNode(blank) = &quad.subject else {
                continue;
            };
            if mapping.contains_key(blank) {
                continue;
            }
            let skolem = self.mint_skolem_iri();
            debug!("Mapping blank node {blank} to named node {skolem}.");
            mapping.insert(blank.clone(), skolem);
        }
        mapping
    }

    fn mint_skolem_iri(&self) -> NamedNode {
        // The namespace is a constant URN prefix and the suffix a UUID, so the concatenation is
        // always a valid IRI.
        NamedNode::new_unchecked(format!("{}{}", self.namespace, Uuid::new_v4()))
    }
}

/// Rewrites every position of `quad` that holds a mapped blank node in a single step. The
/// predicate position cannot hold a blank node and is always kept.
fn rewrite_quad(quad: Quad, mapping: &FxHashMap<BlankNode, NamedNode>) -> Quad {
    let subject = match quad.subject {
        Subject::BlankNode(blank) => match mapping.get(&blank) {
            Some(skolem) => skolem.clone().into(),
            None => Subject::BlankNode(blank),
        },
        subject => subject,
    };
    let object = match quad.object {
        Term::BlankNode(blank) => match mapping.get(&blank) {
            Some(skolem) => skolem.clone().into(),
            None => Term::BlankNode(blank),
        },
        object => object,
    };
    let graph_name = match quad.graph_name {
        GraphName::BlankNode(blank) => match mapping.get(&blank) {
            Some(skolem) => skolem.clone().into(),
            None => GraphName::BlankNode(blank),
        },
        graph_name => graph_name,
    };
    Quad {
        subject,
        predicate: quad.predicate,
        object,
        graph_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_skolem_model::Literal;

    fn named(suffix: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{suffix}"))
    }

    fn subject_of(quad: &Quad) -> &NamedNode {
        match &quad.subject {
            Subject::NamedNode(node) => node,
            Subject::BlankNode(blank) => panic!("subject {blank} was not skolemized"),
        }
    }

    fn assert_skolem_iri(node: &NamedNode) {
        let suffix = node
            .as_str()
            .strip_prefix(SKOLEM_URN_PREFIX)
            .unwrap_or_else(|| panic!("{node} is not in the skolem namespace"));
        assert!(
            Uuid::parse_str(suffix).is_ok(),
            "skolem IRI suffix should be a UUID, got {suffix}"
        );
    }

    #[test]
    fn identity_on_dataset_without_blank_nodes() {
        let dataset = Dataset::from_iter([
            Quad::new(named("s"), named("p"), named("o"), GraphName::DefaultGraph),
            Quad::new(named("s"), named("p"), Literal::from("v"), named("g")),
        ]);
        let output = Skolemizer::new().skolemize(dataset.clone());
        assert_eq!(output, dataset);
    }

    #[test]
    fn blank_subject_is_replaced_by_skolem_iri() {
        let dataset = Dataset::from_iter([Quad::new(
            BlankNode::new_unchecked("x"),
            named("p"),
            named("T"),
            GraphName::DefaultGraph,
        )]);
        let output = Skolemizer::new().skolemize(dataset);

        assert_eq!(output.len(), 1);
        let quad = output.iter().next().unwrap();
        assert_skolem_iri(subject_of(quad));
        assert_eq!(quad.predicate, named("p"));
        assert_eq!(quad.object, named("T").into());
        assert_eq!(quad.graph_name, GraphName::DefaultGraph);
    }

    #[test]
    fn same_blank_node_maps_to_one_named_node_everywhere() {
        let b = BlankNode::new_unchecked("b");
        let dataset = Dataset::from_iter([
            Quad::new(b.clone(), named("p"), Literal::from("v1"), GraphName::DefaultGraph),
            Quad::new(named("s"), named("q"), b.clone(), GraphName::DefaultGraph),
            Quad::new(named("s"), named("r"), named("o"), b.clone()),
        ]);
        let output = Skolemizer::new().skolemize(dataset);

        let mut skolems = FxHashMap::default();
        for quad in &output {
            if let Subject::NamedNode(node) = &quad.subject {
                if node.as_str().starts_with(SKOLEM_URN_PREFIX) {
                    *skolems.entry(node.clone()).or_insert(0) += 1;
                }
            }
            if let Term::NamedNode(node) = &quad.object {
                if node.as_str().starts_with(SKOLEM_URN_PREFIX) {
                    *skolems.entry(node.clone()).or_insert(0) += 1;
                }
            }
            if let GraphName::NamedNode(node) = &quad.graph_name {
                if node.as_str().starts_with(SKOLEM_URN_PREFIX) {
                    *skolems.entry(node.clone()).or_insert(0) += 1;
                }
            }
        }
        // One distinct skolem IRI, substituted at all three occurrences.
        assert_eq!(skolems.len(), 1);
        assert_eq!(skolems.into_values().sum::<i32>(), 3);
    }

    #[test]
    fn distinct_blank_nodes_map_to_distinct_named_nodes() {
        let dataset = Dataset::from_iter([
            Quad::new(
                BlankNode::new_unchecked("b1"),
                named("p"),
                named("o"),
                GraphName::DefaultGraph,
            ),
            Quad::new(
                BlankNode::new_unchecked("b2"),
                named("p"),
                named("o"),
                GraphName::DefaultGraph,
            ),
        ]);
        let output = Skolemizer::new().skolemize(dataset);

        let subjects: Vec<_> = output.iter().map(|quad| subject_of(quad).clone()).collect();
        assert_eq!(subjects.len(), 2);
        assert_ne!(subjects[0], subjects[1]);
        for subject in &subjects {
            assert_skolem_iri(subject);
        }
    }

    #[test]
    fn blank_node_never_in_subject_position_passes_through() {
        // _:b1 occurs as subject and object, _:b2 only as object. Only _:b1 is discovered.
        let b1 = BlankNode::new_unchecked("b1");
        let b2 = BlankNode::new_unchecked("b2");
        let dataset = Dataset::from_iter([
            Quad::new(b1.clone(), named("p"), Literal::from("v1"), GraphName::DefaultGraph),
            Quad::new(b1.clone(), named("q"), b2.clone(), GraphName::DefaultGraph),
            Quad::new(named("s"), named("r"), b1.clone(), GraphName::DefaultGraph),
        ]);
        let output = Skolemizer::new().skolemize(dataset);

        assert_eq!(output.len(), 3);
        for quad in &output {
            assert_ne!(quad.subject, b1.clone().into());
            assert_ne!(quad.object, b1.clone().into());
        }
        let survivors: Vec<_> = output
            .matching(None, None, Some(b2.as_ref().into()), None)
            .collect();
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn no_mapping_is_kept_across_invocations() {
        let dataset = Dataset::from_iter([Quad::new(
            BlankNode::new_unchecked("x"),
            named("p"),
            named("T"),
            GraphName::DefaultGraph,
        )]);
        let skolemizer = Skolemizer::new();
        let first = skolemizer.skolemize(dataset.clone());
        let second = skolemizer.skolemize(dataset);

        let first = subject_of(first.iter().next().unwrap()).clone();
        let second = subject_of(second.iter().next().unwrap()).clone();
        assert_ne!(first, second);
    }

    #[test]
    fn duplicate_blank_subjects_share_one_skolem_iri() {
        let b = BlankNode::new_unchecked("b");
        let dataset = Dataset::from_iter([
            Quad::new(b.clone(), named("p"), named("o1"), GraphName::DefaultGraph),
            Quad::new(b.clone(), named("p"), named("o2"), GraphName::DefaultGraph),
            Quad::new(b, named("q"), named("o3"), GraphName::DefaultGraph),
        ]);
        let output = Skolemizer::new().skolemize(dataset);

        let subjects: FxHashMap<_, _> = output
            .iter()
            .map(|quad| (subject_of(quad).clone(), ()))
            .collect();
        assert_eq!(subjects.len(), 1);
    }
}
