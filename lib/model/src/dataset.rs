use oxrdf::{GraphNameRef, NamedNodeRef, Quad, SubjectRef, TermRef};
use rustc_hash::FxHashSet;
use std::collections::hash_set;
use std::fmt;

/// An in-memory [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
///
/// A dataset is an unordered, duplicate-free collection of [`Quad`]s. Quads are compared by
/// structural equality, never by identity, and the dataset has no identity beyond its contents:
/// two datasets holding structurally equal quads compare equal regardless of insertion order.
///
/// Usage example:
/// ```
/// use rdf_skolem_model::{Dataset, GraphName, NamedNode, Quad};
///
/// let ex = NamedNode::new("http://example.com")?;
/// let quad = Quad::new(ex.clone(), ex.clone(), ex.clone(), GraphName::DefaultGraph);
///
/// let mut dataset = Dataset::new();
/// assert!(dataset.insert(quad.clone()));
/// assert!(!dataset.insert(quad.clone())); // no duplicates
/// assert!(dataset.contains(&quad));
/// # Result::<_, rdf_skolem_model::IriParseError>::Ok(())
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Dataset {
    quads: FxHashSet<Quad>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of quads in the dataset.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Returns whether the dataset contains no quads.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Returns whether a structurally equal quad is part of the dataset.
    pub fn contains(&self, quad: &Quad) -> bool {
        self.quads.contains(quad)
    }

    /// Adds a quad to the dataset.
    ///
    /// Returns `false` if a structurally equal quad was already present.
    pub fn insert(&mut self, quad: Quad) -> bool {
        self.quads.insert(quad)
    }

    /// Removes a quad from the dataset.
    ///
    /// Returns `false` if no structurally equal quad was present.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        self.quads.remove(quad)
    }

    /// Iterates over the quads of the dataset in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.quads.iter(),
        }
    }

    /// Returns all quads matching the given pattern, in no particular order.
    ///
    /// A `None` position is a wildcard, a `Some` position must be structurally equal to the
    /// corresponding term of a quad for the quad to match. Passing `None` everywhere yields the
    /// full dataset.
    ///
    /// Usage example:
    /// ```
    /// use rdf_skolem_model::{Dataset, GraphName, NamedNode, Quad};
    ///
    /// let s = NamedNode::new("http://example.com/s")?;
    /// let p = NamedNode::new("http://example.com/p")?;
    /// let o = NamedNode::new("http://example.com/o")?;
    /// let dataset = Dataset::from_iter([Quad::new(
    ///     s.clone(),
    ///     p.clone(),
    ///     o.clone(),
    ///     GraphName::DefaultGraph,
    /// )]);
    ///
    /// let matches = dataset
    ///     .matching(Some(s.as_ref().into()), None, None, None)
    ///     .count();
    /// assert_eq!(matches, 1);
    /// # Result::<_, rdf_skolem_model::IriParseError>::Ok(())
    /// ```
    pub fn matching<'a>(
        &'a self,
        subject: Option<SubjectRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
        graph_name: Option<GraphNameRef<'a>>,
    ) -> impl Iterator<Item = &'a Quad> + 'a {
        self.quads.iter().filter(move |quad| {
            subject.map_or(true, |s| quad.subject.as_ref() == s)
                && predicate.map_or(true, |p| quad.predicate.as_ref() == p)
                && object.map_or(true, |o| quad.object.as_ref() == o)
                && graph_name.map_or(true, |g| quad.graph_name.as_ref() == g)
        })
    }
}

impl fmt::Display for Dataset {
    /// Formats the dataset as [N-Quads](https://www.w3.org/TR/n-quads/), in no particular order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quad in self {
            writeln!(f, "{quad} .")?;
        }
        Ok(())
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        Self {
            quads: iter.into_iter().collect(),
        }
    }
}

impl Extend<Quad> for Dataset {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        self.quads.extend(iter);
    }
}

impl IntoIterator for Dataset {
    type Item = Quad;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.quads.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Quad;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over the quads of a [`Dataset`].
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, Quad>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Quad;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An owning iterator over the quads of a [`Dataset`].
pub struct IntoIter {
    inner: hash_set::IntoIter<Quad>,
}

impl Iterator for IntoIter {
    type Item = Quad;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
