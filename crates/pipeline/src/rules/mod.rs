//! Condition rules and the registry that holds them.
//!
//! One rule per condition field. New fields or alternative heuristics are
//! added by registering another [`ConditionRule`]; the filter itself does
//! not change.

pub mod age;
pub mod children;
pub mod disability;
pub mod education;
pub mod employment;
pub mod income;
pub mod region;

// Re-export for convenience
pub use age::{AgeExpression, AgeRule};
pub use children::ChildrenRule;
pub use disability::DisabilityRule;
pub use education::EducationRule;
pub use employment::EmploymentRule;
pub use income::IncomeRule;
pub use region::RegionRule;

use crate::traits::ConditionRule;
use data_loader::ConditionField;

/// An ordered collection of condition rules.
///
/// ## Usage
/// ```ignore
/// let registry = RuleRegistry::standard().register(MyVeteranRule::new());
/// let filter = ConditionFilter::with_registry(registry);
/// ```
pub struct RuleRegistry {
    rules: Vec<Box<dyn ConditionRule>>,
}

impl RuleRegistry {
    /// A registry with no rules. Every record passes.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// One rule for each of the seven condition fields.
    pub fn standard() -> Self {
        Self::new()
            .register(AgeRule::new())
            .register(RegionRule::new())
            .register(EmploymentRule::new())
            .register(IncomeRule::new())
            .register(EducationRule::new())
            .register(ChildrenRule::new())
            .register(DisabilityRule::new())
    }

    /// Add a rule (builder pattern).
    pub fn register(mut self, rule: impl ConditionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rules(&self) -> &[Box<dyn ConditionRule>] {
        &self.rules
    }

    /// Rules that read `field`
    pub fn rules_for(&self, field: ConditionField) -> impl Iterator<Item = &dyn ConditionRule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref() as &dyn ConditionRule)
            .filter(move |rule| rule.field() == field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
