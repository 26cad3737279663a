pub mod errors;
pub mod handler;
pub mod prompter;
pub mod types;
pub mod validation;

pub use errors::SelectorError;
pub use handler::{build_choices, select_window_and_size};
pub use prompter::{InquirePrompter, Prompter};
pub use types::{Choice, Selection};
pub use validation::{DimensionError, INVALID_DIMENSION_MESSAGE, parse_dimension};
