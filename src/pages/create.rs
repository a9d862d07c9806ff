use log::{info, warn};

use crate::db::StudentStore;
use crate::err::RegistryError;
use crate::pages::{duplicate_registration_errors, Notice};
use crate::student::StudentForm;
use crate::validate::{validate, FieldErrors};

/// Outcome of a create submission.
#[derive(Debug)]
pub enum CreateResponse {
    /// Record stored; redirect to the list with the notice.
    Created(Notice),
    /// Validation or uniqueness rejection; redisplay the form as submitted.
    Invalid {
        form: StudentForm,
        errors: FieldErrors,
    },
}

/// Display phase: an empty form.
pub fn show() -> StudentForm {
    StudentForm::default()
}

/// Submit phase: field validation, then the uniqueness rule, then the insert.
/// Nothing is written unless both checks pass.
pub async fn submit(
    store: &StudentStore,
    form: StudentForm,
) -> Result<CreateResponse, RegistryError> {
    let errors = validate(&form);
    if !errors.is_empty() {
        return Ok(CreateResponse::Invalid { form, errors });
    }

    if store
        .find_by_registration_number(&form.registration_number, None)
        .await?
        .is_some()
    {
        warn!(
            "rejected registration with duplicate number {}",
            form.registration_number
        );
        return Ok(CreateResponse::Invalid {
            errors: duplicate_registration_errors(),
            form,
        });
    }

    let student = store.insert(&form).await?;
    info!(
        "registered student {} ({})",
        student.full_name, student.registration_number
    );
    Ok(CreateResponse::Created(Notice::registered(
        &student.full_name,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{alice, store};
    use crate::pages::DUPLICATE_REGISTRATION_MESSAGE;
    use crate::validate::field;

    #[test]
    fn show_returns_an_empty_form() {
        assert_eq!(show(), StudentForm::default());
    }

    #[tokio::test]
    async fn valid_submission_stores_the_record_and_notifies() {
        let (_dir, store) = store().await;

        let response = submit(&store, alice()).await.unwrap();
        match response {
            CreateResponse::Created(notice) => assert_eq!(
                notice.0,
                "Student Alice Kim has been registered successfully!"
            ),
            other => panic!("expected Created, got {other:?}"),
        }

        let students = store.list_all().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].full_name, "Alice Kim");
        assert_eq!(students[0].registration_number, "REG-001");
        assert_eq!(students[0].course, "CS");
        assert_eq!(students[0].year_of_study, 2);
    }

    #[tokio::test]
    async fn invalid_year_is_rejected_before_storage_is_touched() {
        let (_dir, store) = store().await;

        let mut form = alice();
        form.year_of_study = Some(6);
        let response = submit(&store, form).await.unwrap();
        match response {
            CreateResponse::Invalid { form, errors } => {
                assert_eq!(form.year_of_study, Some(6));
                assert_eq!(
                    errors.messages(field::YEAR_OF_STUDY),
                    ["Year of Study must be between 1 and 5"]
                );
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_number_is_rejected_with_a_field_error() {
        let (_dir, store) = store().await;
        submit(&store, alice()).await.unwrap();

        let duplicate = StudentForm::new("Bob Lee", "REG-001", "Math", Some(1));
        let response = submit(&store, duplicate).await.unwrap();
        match response {
            CreateResponse::Invalid { form, errors } => {
                // user input is preserved for the redisplay
                assert_eq!(form.full_name, "Bob Lee");
                assert_eq!(
                    errors.messages(field::REGISTRATION_NUMBER),
                    [DUPLICATE_REGISTRATION_MESSAGE]
                );
            }
            other => panic!("expected Invalid, got {other:?}"),
        }

        let students = store.list_all().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].full_name, "Alice Kim");
    }

    #[tokio::test]
    async fn concurrent_duplicate_creates_store_exactly_one_record() {
        let (_dir, store) = store().await;

        let mut tasks = Vec::new();
        for name in ["Alice Kim", "Bob Lee"] {
            let store = store.clone();
            let form = StudentForm::new(name, "REG-001", "CS", Some(2));
            tasks.push(tokio::spawn(
                async move { submit(&store, form).await },
            ));
        }

        let results = futures::future::join_all(tasks).await;
        let mut created = 0;
        for result in results {
            // the loser is rejected by the advisory check or the unique index
            if let Ok(Ok(CreateResponse::Created(_))) = result {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
