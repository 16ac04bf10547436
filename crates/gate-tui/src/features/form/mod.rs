//! Login form feature slice.
//!
//! - `state.rs`: `FormState`, `Focus`
//! - `text_field.rs`: single-line editable field
//! - `update.rs`: key handling, submission, lookup results
//! - `render.rs`: form rendering

mod render;
mod state;
mod text_field;
mod update;

pub use render::{calculate_form_area, render_form};
pub use state::{Focus, FormState};
pub use text_field::{MASK_CHAR, TextField};
pub use update::{
    FormAction, begin_submit, cancel_lookup, handle_key, handle_lookup_result, handle_paste,
};
