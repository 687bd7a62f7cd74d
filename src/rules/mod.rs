pub mod table;

pub use table::{fire, FiringStrengths, Mode, Rule, WeightClass, RULE_COUNT, RULE_TABLE};
