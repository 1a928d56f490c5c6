mod check;
mod select;

pub use check::run_check;
pub use select::{run_select, SelectArgs};
