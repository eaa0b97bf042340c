// Policies — named filters, categorizers, and predicate builders composed
// from the analysis primitives and the collection operators.

pub mod categorize;
pub mod filters;
pub mod predicates;
