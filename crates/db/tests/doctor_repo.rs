//! Integration tests for the PostgreSQL doctor store.
//!
//! Each test runs against a fresh database created by `sqlx::test` from
//! `DATABASE_URL`, with the crate migrations applied.

use assert_matches::assert_matches;
use clinic_core::doctor::Page;
use clinic_db::models::doctor::{CreateDoctor, DoctorFilter, UpdateDoctor};
use clinic_db::repositories::DoctorRepo;
use clinic_db::store::{DoctorStore, PgDoctorStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_doctor(name: &str, specialty: &str) -> CreateDoctor {
    CreateDoctor {
        name: name.to_string(),
        specialty: specialty.to_string(),
    }
}

async fn insert_patient(pool: &PgPool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO patients (name, email, dob) VALUES ('Pat', 'pat@example.com', NOW())
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_appointment(pool: &PgPool, patient_id: i64, doctor_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO appointments (patient_id, doctor_id, date_time)
         VALUES ($1, $2, NOW()) RETURNING id",
    )
    .bind(patient_id)
    .bind(doctor_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_with_appointments(pool: PgPool) {
    let store = PgDoctorStore::new(pool.clone());
    let doctor = store
        .create(&new_doctor("Dr. Lee", "Cardiology"))
        .await
        .unwrap();

    let patient_id = insert_patient(&pool).await;
    let first = insert_appointment(&pool, patient_id, doctor.id).await;
    let second = insert_appointment(&pool, patient_id, doctor.id).await;

    let found = store
        .find_with_appointments(doctor.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.doctor, doctor);
    let ids: Vec<_> = found.appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(found.appointments[0].status, "scheduled");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let store = PgDoctorStore::new(pool);
    assert_matches!(store.find_with_appointments(999_999).await, Ok(None));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_orders_and_pages(pool: PgPool) {
    for (name, specialty) in [
        ("A", "Dermatology"),
        ("B", "Cardiology"),
        ("C", "Pediatric Dermatology"),
        ("D", "Derm_100%"),
    ] {
        DoctorRepo::create(&pool, &new_doctor(name, specialty))
            .await
            .unwrap();
    }

    let all = DoctorRepo::list(&pool, &DoctorFilter::default())
        .await
        .unwrap();
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let derm = DoctorRepo::list(
        &pool,
        &DoctorFilter {
            specialty: Some("Derm".to_string()),
            page: Page::default(),
        },
    )
    .await
    .unwrap();
    let names: Vec<_> = derm.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);

    // `%` and `_` are matched literally.
    let literal = DoctorRepo::list(
        &pool,
        &DoctorFilter {
            specialty: Some("_100%".to_string()),
            page: Page::default(),
        },
    )
    .await
    .unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].name, "D");

    let window = DoctorRepo::list(
        &pool,
        &DoctorFilter {
            specialty: None,
            page: Page { skip: 1, limit: 2 },
        },
    )
    .await
    .unwrap();
    assert_eq!(window, all[1..3].to_vec());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_applies_only_provided_fields(pool: PgPool) {
    let doctor = DoctorRepo::create(&pool, &new_doctor("Dr. Lee", "Cardiology"))
        .await
        .unwrap();

    let input = UpdateDoctor {
        name: None,
        specialty: Some("Surgery".to_string()),
    };
    let updated = DoctorRepo::update(&pool, doctor.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, doctor.id);
    assert_eq!(updated.name, "Dr. Lee");
    assert_eq!(updated.specialty, "Surgery");

    let missing = DoctorRepo::update(&pool, 999_999, &input).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_returns_prior_row_and_detaches_appointments(pool: PgPool) {
    let doctor = DoctorRepo::create(&pool, &new_doctor("Dr. Lee", "Cardiology"))
        .await
        .unwrap();
    let patient_id = insert_patient(&pool).await;
    let appointment_id = insert_appointment(&pool, patient_id, doctor.id).await;

    let deleted = DoctorRepo::delete(&pool, doctor.id).await.unwrap();
    assert_eq!(deleted, Some(doctor.clone()));
    assert!(DoctorRepo::find_by_id(&pool, doctor.id)
        .await
        .unwrap()
        .is_none());

    let doctor_id: Option<i64> =
        sqlx::query_scalar("SELECT doctor_id FROM appointments WHERE id = $1")
            .bind(appointment_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(doctor_id, None);

    assert!(DoctorRepo::delete(&pool, doctor.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_with_appointments_skips_other_and_detached(pool: PgPool) {
    let lee = DoctorRepo::create(&pool, &new_doctor("Dr. Lee", "Cardiology"))
        .await
        .unwrap();
    let kim = DoctorRepo::create(&pool, &new_doctor("Dr. Kim", "Surgery"))
        .await
        .unwrap();
    let patient_id = insert_patient(&pool).await;
    let own = insert_appointment(&pool, patient_id, lee.id).await;
    insert_appointment(&pool, patient_id, kim.id).await;

    let found = DoctorRepo::find_with_appointments(&pool, lee.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.doctor, lee);
    let ids: Vec<_> = found.appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![own]);

    DoctorRepo::delete(&pool, kim.id).await.unwrap();
    assert!(DoctorRepo::find_with_appointments(&pool, kim.id)
        .await
        .unwrap()
        .is_none());

    // The read transaction is committed, so the pool stays usable for writes.
    let updated = DoctorRepo::update(
        &pool,
        lee.id,
        &UpdateDoctor {
            name: Some("Dr. Lee-Park".to_string()),
            specialty: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Dr. Lee-Park");
}
