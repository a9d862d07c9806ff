use log::{info, warn};

use crate::db::StudentStore;
use crate::err::RegistryError;
use crate::pages::{duplicate_registration_errors, Notice};
use crate::student::{Student, StudentForm};
use crate::validate::{validate, FieldErrors};

/// Outcome of an edit submission.
#[derive(Debug)]
pub enum EditResponse {
    /// Record rewritten; redirect to the list with the notice.
    Updated(Notice),
    /// Validation or uniqueness rejection; redisplay the form as submitted.
    Invalid {
        form: StudentForm,
        errors: FieldErrors,
    },
    /// The record vanished between load and save (or never existed).
    NotFound,
}

/// Display phase: load the record to pre-fill the form. `None` when the id is
/// absent or unknown.
pub async fn show(
    store: &StudentStore,
    id: Option<i64>,
) -> Result<Option<Student>, RegistryError> {
    match id {
        Some(id) => store.get_by_id(id).await,
        None => Ok(None),
    }
}

/// Submit phase: field validation, the uniqueness rule excluding the record's
/// own id, then the update.
pub async fn submit(
    store: &StudentStore,
    id: i64,
    form: StudentForm,
) -> Result<EditResponse, RegistryError> {
    let errors = validate(&form);
    if !errors.is_empty() {
        return Ok(EditResponse::Invalid { form, errors });
    }

    // another record may already own the number; this one may keep its own
    if store
        .find_by_registration_number(&form.registration_number, Some(id))
        .await?
        .is_some()
    {
        warn!(
            "rejected edit of student {id} with duplicate number {}",
            form.registration_number
        );
        return Ok(EditResponse::Invalid {
            errors: duplicate_registration_errors(),
            form,
        });
    }

    if !store.update(id, &form).await? {
        return Ok(EditResponse::NotFound);
    }
    info!("updated student {id} ({})", form.registration_number);
    Ok(EditResponse::Updated(Notice::updated(&form.full_name)))
}
