//! Wizard Steps
//!
//! The three linear steps of the card maker and their transitions.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    DataEntry,
    StyleSelect,
    Export,
}

impl WizardStep {
    pub fn all() -> [Self; 3] {
        [WizardStep::DataEntry, WizardStep::StyleSelect, WizardStep::Export]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::DataEntry => 0,
            WizardStep::StyleSelect => 1,
            WizardStep::Export => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::DataEntry => "Fill Info",
            WizardStep::StyleSelect => "Pick Style",
            WizardStep::Export => "Download",
        }
    }

    /// Step that "Next" leads to; the last step has none
    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::DataEntry => Some(WizardStep::StyleSelect),
            WizardStep::StyleSelect => Some(WizardStep::Export),
            WizardStep::Export => None,
        }
    }

    /// Step that "Back" / "Change Style" leads to
    pub fn prev(&self) -> Option<Self> {
        match self {
            WizardStep::DataEntry => None,
            WizardStep::StyleSelect => Some(WizardStep::DataEntry),
            WizardStep::Export => Some(WizardStep::StyleSelect),
        }
    }

    /// Indicator shows a check mark for steps behind `current`
    pub fn is_done_relative_to(&self, current: WizardStep) -> bool {
        self.index() < current.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_step() {
        assert_eq!(WizardStep::default(), WizardStep::DataEntry);
    }

    #[test]
    fn test_forward_and_back() {
        assert_eq!(WizardStep::DataEntry.next(), Some(WizardStep::StyleSelect));
        assert_eq!(WizardStep::StyleSelect.prev(), Some(WizardStep::DataEntry));
        assert_eq!(WizardStep::StyleSelect.next(), Some(WizardStep::Export));
        assert_eq!(WizardStep::Export.prev(), Some(WizardStep::StyleSelect));
        assert_eq!(WizardStep::Export.next(), None);
        assert_eq!(WizardStep::DataEntry.prev(), None);
    }

    #[test]
    fn test_indices_follow_order() {
        for (i, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_done_marks() {
        let current = WizardStep::Export;
        assert!(WizardStep::DataEntry.is_done_relative_to(current));
        assert!(WizardStep::StyleSelect.is_done_relative_to(current));
        assert!(!WizardStep::Export.is_done_relative_to(current));
    }
}
