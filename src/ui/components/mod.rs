mod highlight;
mod prompt;
mod tables;

pub(crate) use prompt::{InputContext, ProgressState, render_input_line};
pub(crate) use tables::{TablePane, render_table};
