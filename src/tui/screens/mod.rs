pub mod document;
pub mod home;
pub mod signup;

pub use document::DocumentState;
pub use home::HomeState;
pub use signup::{SignUpMode, SignUpState};
