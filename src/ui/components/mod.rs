//! Reusable widgets.

mod input_field;

pub use input_field::{masked_value, render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
