use curve_sum_field::*;

use thiserror::Error;

///
/// Errors that can stop a tutorial from starting or an exercise from loading
///
#[derive(Clone, PartialEq, Debug, Error)]
pub enum TutorialError {
    /// A part of the surface that the tutorial needs was not supplied
    #[error("the '{0}' surface element is missing")]
    MissingElement(&'static str),

    /// There is no exercise with the requested id
    #[error("no exercise with id '{0}'")]
    UnknownExercise(String),

    /// An exercise has no steps to show
    #[error("exercise '{0}' has no tutorial steps")]
    EmptyExercise(String),

    /// The exercise's curve field could not be set up
    #[error(transparent)]
    Field(#[from] FieldError),
}
