// Unit tests for Job Match

use chrono::{DateTime, Duration, TimeZone, Utc};
use job_match::core::{calculate_match_score, days_since_posted, normalized};
use job_match::models::{ApplicantProfile, JobPosting};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}

fn boston_nurse() -> ApplicantProfile {
    ApplicantProfile {
        profession: Some("Registered Nurse".to_string()),
        city: Some("Boston".to_string()),
        state: Some("MA".to_string()),
        experience_level: Some("5 years senior".to_string()),
        education_level: None,
        certifications: Some("RN, BLS".to_string()),
    }
}

fn senior_rn_posting() -> JobPosting {
    JobPosting {
        id: Some("job-1".to_string()),
        title: Some("Senior Registered Nurse".to_string()),
        description: Some("Med-surg floor".to_string()),
        department: Some("Nursing".to_string()),
        requirements: Some("RN required, BLS certified".to_string()),
        city: Some("Boston".to_string()),
        state: Some("MA".to_string()),
        posted_date: Some(now() - Duration::days(3)),
        applications_count: Some(2),
    }
}

#[test]
fn test_senior_nurse_in_same_city() {
    let result = calculate_match_score(&boston_nurse(), &senior_rn_posting(), now());

    // 35 + 25 + 20 + 8 + 6 + 5 + 5 = 104 before the clamp
    assert_eq!(result.match_score, 100);
    assert_eq!(result.match_reasons.len(), 5);
    assert_eq!(result.match_reasons[0], "Matches your profession");
    assert_eq!(result.match_reasons[1], "Same city as you");
    assert_eq!(result.match_reasons[2], "Senior level position");
}

#[test]
fn test_empty_applicant_only_gets_posting_bonuses() {
    let result = calculate_match_score(&ApplicantProfile::default(), &senior_rn_posting(), now());

    assert_eq!(result.match_score, 10);
    assert_eq!(result.match_reasons, vec!["Recently posted", "Low competition"]);
}

#[test]
fn test_blank_fields_count_as_absent() {
    let blank = ApplicantProfile {
        profession: Some("   ".to_string()),
        city: Some("".to_string()),
        state: Some(" ".to_string()),
        experience_level: Some("".to_string()),
        education_level: Some("\t".to_string()),
        certifications: Some(" ".to_string()),
    };
    let mut posting = senior_rn_posting();
    posting.posted_date = None;
    posting.applications_count = None;

    let result = calculate_match_score(&blank, &posting, now());
    assert_eq!(result.match_score, 0);
    assert!(result.match_reasons.is_empty());
}

#[test]
fn test_role_variant_without_verbatim_profession() {
    let applicant = ApplicantProfile {
        profession: Some("nurse".to_string()),
        ..Default::default()
    };
    let job = JobPosting {
        title: Some("RN Needed".to_string()),
        ..Default::default()
    };

    let result = calculate_match_score(&applicant, &job, now());
    assert_eq!(result.match_score, 30);
    assert_eq!(result.match_reasons, vec!["Matches your healthcare role"]);
}

#[test]
fn test_zero_applications_has_no_competition_bonus() {
    let job = JobPosting {
        applications_count: Some(0),
        ..Default::default()
    };
    let result = calculate_match_score(&ApplicantProfile::default(), &job, now());
    assert_eq!(result.match_score, 0);
}

#[test]
fn test_uppercased_job_scores_the_same() {
    let job = senior_rn_posting();
    let shout = |s: &Option<String>| s.as_ref().map(|v| v.to_uppercase());
    let upper = JobPosting {
        title: shout(&job.title),
        description: shout(&job.description),
        department: shout(&job.department),
        requirements: shout(&job.requirements),
        city: shout(&job.city),
        state: shout(&job.state),
        ..job.clone()
    };

    let applicant = ApplicantProfile {
        certifications: Some("rn, bls, acls".to_string()),
        education_level: Some("Bachelor's".to_string()),
        ..boston_nurse()
    };

    assert_eq!(
        calculate_match_score(&applicant, &job, now()),
        calculate_match_score(&applicant, &upper, now())
    );
}

#[test]
fn test_score_is_deterministic() {
    let first = calculate_match_score(&boston_nurse(), &senior_rn_posting(), now());
    let second = calculate_match_score(&boston_nurse(), &senior_rn_posting(), now());
    assert_eq!(first, second);
}

#[test]
fn test_location_is_monotonic() {
    let applicant = ApplicantProfile {
        city: Some("Portland".to_string()),
        state: Some("OR".to_string()),
        ..Default::default()
    };
    let at = |city: &str, state: &str| {
        let job = JobPosting {
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            ..Default::default()
        };
        calculate_match_score(&applicant, &job, now()).match_score
    };

    let exact = at("Portland", "OR");
    let same_state = at("Salem", "OR");
    let nearby = at("South Portland", "ME");
    let none = at("Denver", "CO");

    assert!(exact >= same_state);
    assert!(same_state >= nearby);
    assert!(nearby >= none);
    assert_eq!((exact, same_state, nearby, none), (25, 15, 10, 0));
}

#[test]
fn test_days_since_posted() {
    assert_eq!(days_since_posted(now() - Duration::days(10), now()), 10);
    assert_eq!(days_since_posted(now() - Duration::hours(23), now()), 0);
}

#[test]
fn test_normalized_helper() {
    assert_eq!(normalized(Some(" ICU ")), Some("icu".to_string()));
    assert_eq!(normalized(Some("")), None);
}
