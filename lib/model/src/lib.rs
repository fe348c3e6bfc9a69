mod dataset;

pub use dataset::*;

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, BlankNodeRef, GraphName, GraphNameRef, IriParseError,
    Literal, LiteralRef, NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Quad,
    QuadRef, Subject, SubjectRef, Term, TermParseError, TermRef,
};
