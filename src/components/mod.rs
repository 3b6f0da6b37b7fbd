//! UI Components
//!
//! Leptos components for the wizard panels and the card preview.

mod category_picker;
mod details_step;
mod export_step;
mod field_input;
mod info_card;
mod rating_picker;
mod step_indicator;
mod style_step;

pub use category_picker::CategoryPicker;
pub use details_step::DetailsStep;
pub use export_step::ExportStep;
pub use field_input::FieldInput;
pub use info_card::InfoCard;
pub use rating_picker::RatingPicker;
pub use step_indicator::StepIndicator;
pub use style_step::StyleStep;
