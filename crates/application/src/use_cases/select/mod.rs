mod select_answers;

pub use select_answers::{SelectAnswersUseCase, SelectedAnswer, SelectionOutcome};
