//! Region rule: the region name appears anywhere, or the program is
//! nationwide.

use crate::joined_text::JoinedText;
use crate::tables::NATIONWIDE_MARKER;
use crate::traits::ConditionRule;
use data_loader::ConditionField;

#[derive(Debug, Default)]
pub struct RegionRule;

impl RegionRule {
    pub fn new() -> Self {
        Self
    }
}

impl ConditionRule for RegionRule {
    fn name(&self) -> &str {
        "RegionRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::Region
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        text.contains(&value.to_lowercase()) || text.contains(NATIONWIDE_MARKER)
    }
}
