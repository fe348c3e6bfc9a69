mod skolemizer;

pub use skolemizer::*;
