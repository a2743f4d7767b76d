// src/services/athlete_service_tests.rs
//
// Unit tests for the Athlete mutation protocols against mocked
// repositories: field validation is collected alongside the reference
// pre-checks, and the update protocol matches the Sport one.

#[cfg(test)]
mod tests {
    use crate::domain::{Athlete, Contingent, EntityKind, Sport};
    use crate::error::AppError;
    use crate::repositories::{
        MockAthleteRepository, MockContingentRepository, MockSportRepository,
    };
    use crate::services::AthleteService;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use uuid::Uuid;

    fn service(
        athletes: MockAthleteRepository,
        sports: MockSportRepository,
        contingents: MockContingentRepository,
    ) -> AthleteService {
        AthleteService::new(Arc::new(athletes), Arc::new(sports), Arc::new(contingents))
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn valid_candidate() -> Athlete {
        let mut a = Athlete::new("Summer", "McIntosh", d(2006, 8, 18), 175, 60.0, 1, 1);
        a.athlete_code = "1234567".to_string();
        a
    }

    fn references_exist() -> (MockSportRepository, MockContingentRepository) {
        let mut sports = MockSportRepository::new();
        sports.expect_exists().returning(|_| Ok(true));
        let mut contingents = MockContingentRepository::new();
        contingents.expect_exists().returning(|_| Ok(true));
        (sports, contingents)
    }

    #[test]
    fn create_collects_field_and_reference_failures_together() {
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_insert().never();
        let mut sports = MockSportRepository::new();
        sports.expect_exists().returning(|_| Ok(false));
        let mut contingents = MockContingentRepository::new();
        contingents.expect_exists().returning(|_| Ok(false));

        let mut candidate = valid_candidate();
        candidate.dob = d(1990, 1, 1); // below the window
        candidate.height_cm = 200;
        candidate.weight_kg = 170.0; // BMI 42.5

        let err = service(athletes, sports, contingents)
            .create(candidate)
            .unwrap_err();
        match err {
            AppError::Validation(failures) => {
                let fields: Vec<&str> = failures.iter().map(|f| f.field).collect();
                assert_eq!(fields, vec!["DOB", "Weight", "SportID", "ContingentID"]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn create_valid_athlete_returns_stored_record() {
        let version = Uuid::new_v4();
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_insert().returning(move |a| {
            let mut stored = a.clone();
            stored.id = 7;
            stored.row_version = Some(version);
            Ok(stored)
        });
        let (sports, contingents) = references_exist();

        let stored = service(athletes, sports, contingents)
            .create(valid_candidate())
            .unwrap();
        assert_eq!(stored.id, 7);
        assert_eq!(stored.row_version, Some(version));
    }

    #[test]
    fn create_surfaces_duplicate_athlete_code() {
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_insert().returning(|_| {
            Err(AppError::DuplicateKey {
                entity: EntityKind::Athlete,
                field: "AthleteCode",
            })
        });
        let (sports, contingents) = references_exist();

        let err = service(athletes, sports, contingents)
            .create(valid_candidate())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::DuplicateKey {
                field: "AthleteCode",
                ..
            }
        ));
    }

    #[test]
    fn update_with_stale_token_conflicts_before_any_write() {
        let current = Uuid::new_v4();
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_get_by_id().returning(move |id| {
            let mut a = valid_candidate();
            a.id = id;
            a.row_version = Some(current);
            Ok(Some(a))
        });
        athletes.expect_update().never();
        let (sports, contingents) = references_exist();

        let mut candidate = valid_candidate();
        candidate.id = 7;
        candidate.row_version = Some(Uuid::new_v4()); // stale

        let err = service(athletes, sports, contingents)
            .update(7, candidate)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::ConcurrencyConflict {
                entity: EntityKind::Athlete
            }
        ));
    }

    #[test]
    fn update_without_token_skips_advisory_check() {
        let current = Uuid::new_v4();
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_get_by_id().returning(move |id| {
            let mut a = valid_candidate();
            a.id = id;
            a.row_version = Some(current);
            Ok(Some(a))
        });
        athletes
            .expect_update()
            .withf(|_, expected, _| expected.is_none())
            .returning(|_, _, _| Ok(true));
        let (sports, contingents) = references_exist();

        let mut candidate = valid_candidate();
        candidate.id = 7;
        candidate.row_version = None;

        service(athletes, sports, contingents)
            .update(7, candidate)
            .unwrap();
    }

    #[test]
    fn update_race_with_concurrent_delete_is_gone_conflict() {
        let current = Uuid::new_v4();
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_get_by_id().returning(move |id| {
            let mut a = valid_candidate();
            a.id = id;
            a.row_version = Some(current);
            Ok(Some(a))
        });
        athletes.expect_update().returning(|_, _, _| Ok(false));
        athletes.expect_exists().returning(|_| Ok(false));
        let (sports, contingents) = references_exist();

        let mut candidate = valid_candidate();
        candidate.id = 7;
        candidate.row_version = Some(current);

        let err = service(athletes, sports, contingents)
            .update(7, candidate)
            .unwrap_err();
        assert!(matches!(err, AppError::GoneConflict { .. }));
    }

    #[test]
    fn get_embeds_sport_and_contingent() {
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_get_by_id().returning(|id| {
            let mut a = valid_candidate();
            a.id = id;
            a.row_version = Some(Uuid::new_v4());
            Ok(Some(a))
        });
        let mut sports = MockSportRepository::new();
        sports.expect_get_by_id().returning(|id| {
            Ok(Some(Sport {
                id,
                code: "SWM".to_string(),
                name: "Swimming".to_string(),
                row_version: Some(Uuid::new_v4()),
            }))
        });
        let mut contingents = MockContingentRepository::new();
        contingents.expect_get_by_id().returning(|id| {
            Ok(Some(Contingent {
                id,
                code: "CAN".to_string(),
                name: "Canada".to_string(),
                row_version: Some(Uuid::new_v4()),
            }))
        });

        let dto = service(athletes, sports, contingents).get(7).unwrap();
        assert_eq!(dto.sport.as_ref().unwrap().code, "SWM");
        assert_eq!(dto.contingent.as_ref().unwrap().code, "CAN");
    }

    #[test]
    fn empty_relation_list_is_a_distinct_signal() {
        let mut athletes = MockAthleteRepository::new();
        athletes.expect_list_by_sport().returning(|_| Ok(Vec::new()));
        let sports = MockSportRepository::new();
        let contingents = MockContingentRepository::new();

        let err = service(athletes, sports, contingents)
            .list_by_sport(1)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::NoneForRelation {
                entity: EntityKind::Athlete,
                relation: EntityKind::Sport
            }
        ));
    }
}
