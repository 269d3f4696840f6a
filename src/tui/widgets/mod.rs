pub mod checkbox;
pub mod choice_selector;
pub mod common;
pub mod date_picker;
pub mod form_field;
pub mod modal_dialog;
pub mod text_input;

pub use checkbox::Checkbox;
pub use choice_selector::ChoiceSelector;
pub use date_picker::DatePicker;
pub use form_field::{FormField, ValidationState};
pub use modal_dialog::{DialogType, ModalDialog};
pub use text_input::TextInput;
