pub mod membership;
pub mod universe;
pub mod variable;

pub use membership::TriangularMf;
pub use universe::Universe;
pub use variable::{ActionClass, Degrees, FuzzyVariable, Level, LABEL_COUNT};
