//! Data access trait definitions implemented by the infrastructure layer.

mod rule_source;

pub use rule_source::RuleSource;

#[cfg(test)]
pub use rule_source::MockRuleSource;
