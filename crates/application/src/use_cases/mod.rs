pub mod select;

pub use select::{SelectAnswersUseCase, SelectedAnswer, SelectionOutcome};
