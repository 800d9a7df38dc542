//! Routine operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, StrideError},
    models::{NewExercise, Routine},
    params::{CreateRoutine, Id, ReplaceExercise, UpdateRoutine},
};

fn validated_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(StrideError::invalid_input("name").with_reason("Routine name is empty"));
    }
    Ok(name.to_string())
}

impl Tracker {
    /// Creates a routine at the end of the rotation. Adding a routine changes
    /// the rotation pattern, so the schedule is recomputed.
    pub async fn create_routine(&self, params: &CreateRoutine) -> Result<Routine> {
        let name = validated_name(&params.name)?;
        let description = params.description.clone();
        let exercises = params
            .exercises
            .iter()
            .map(|spec| spec.validate())
            .collect::<Result<Vec<NewExercise>>>()?;

        self.with_db(move |db, normalizer| {
            db.create_routine(&name, description.as_deref(), &exercises, normalizer)
        })
        .await
    }

    /// Retrieves a routine by its ID.
    pub async fn get_routine(&self, params: &Id) -> Result<Option<Routine>> {
        let id = params.id;
        self.with_db(move |db, _| db.get_routine(id)).await
    }

    /// Lists all routines in rotation order.
    pub async fn list_routines(&self) -> Result<Vec<Routine>> {
        self.with_db(|db, _| db.list_routines()).await
    }

    /// Renames or re-describes a routine. The schedule is unaffected.
    pub async fn update_routine(&self, params: &UpdateRoutine) -> Result<Routine> {
        let id = params.id;
        let name = params.name.as_deref().map(validated_name).transpose()?;
        let description = params.description.clone();

        self.with_db(move |db, _| {
            db.update_routine(id, name.as_deref(), description.as_deref())?
                .ok_or(StrideError::RoutineNotFound { id })
        })
        .await
    }

    /// Deletes a routine and recomputes the schedule. Sessions that used the
    /// routine stay in the history.
    pub async fn delete_routine(&self, params: &Id) -> Result<Routine> {
        let id = params.id;
        self.with_db(move |db, normalizer| {
            db.delete_routine(id, normalizer)?
                .ok_or(StrideError::RoutineNotFound { id })
        })
        .await
    }

    /// Swaps one exercise for another in place. The schedule is unaffected.
    pub async fn replace_exercise(&self, params: &ReplaceExercise) -> Result<Routine> {
        let exercise_id = params.exercise_id;
        let replacement = params.exercise.validate()?;

        self.with_db(move |db, _| {
            db.replace_exercise(exercise_id, &replacement)?
                .ok_or(StrideError::ExerciseNotFound { id: exercise_id })
        })
        .await
    }
}
