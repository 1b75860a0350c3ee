use chrono::{DateTime, Utc};

use crate::core::tables::{CERTIFICATIONS, ROLE_VARIANTS, SPECIALTIES, SPECIALTY_POINTS};
use crate::core::text::{contains, extract_years, first_hit, normalized};
use crate::models::{ApplicantProfile, JobPosting, MatchResult};

/// Upper bound of the final score
pub const MAX_SCORE: u32 = 100;

/// Number of reasons kept on a result
pub const MAX_REASONS: usize = 5;

const SECONDS_PER_DAY: i64 = 86_400;

/// Calculate a match score (0-100) for a job posting based on an applicant profile
///
/// Rules run in a fixed order and add into one running total:
/// 1. profession (title, description, role variants)
/// 2. location (city, state, nearby)
/// 3. experience tier
/// 4. education
/// 5. certifications
/// 6. specialties
/// 7. recency of the posting
/// 8. competition (applications received)
///
/// Categories are not capped individually; only the total is clamped to 100.
/// Reasons keep rule order and are cut to the first five.
pub fn calculate_match_score(
    applicant: &ApplicantProfile,
    job: &JobPosting,
    now: DateTime<Utc>,
) -> MatchResult {
    let applicant = NormalizedApplicant::from(applicant);
    let posting = NormalizedPosting::from(job);

    let mut tally = Tally::default();

    score_profession(&applicant, &posting, &mut tally);
    score_location(&applicant, &posting, &mut tally);
    score_experience(&applicant, &posting, &mut tally);
    score_education(&applicant, &posting, &mut tally);
    score_certifications(&applicant, &posting, &mut tally);
    score_specialties(&applicant, &posting, &mut tally);
    score_recency(job.posted_date, now, &mut tally);
    score_competition(job.applications(), &mut tally);

    tally.finish()
}

/// Running total and reasons in the order they were earned
#[derive(Debug, Default)]
struct Tally {
    score: u32,
    reasons: Vec<&'static str>,
}

impl Tally {
    #[inline]
    fn add(&mut self, points: u32, reason: &'static str) {
        self.score = self.score.saturating_add(points);
        self.reasons.push(reason);
    }

    fn finish(self) -> MatchResult {
        MatchResult {
            match_score: self.score.min(MAX_SCORE) as u8,
            match_reasons: self
                .reasons
                .into_iter()
                .take(MAX_REASONS)
                .map(str::to_string)
                .collect(),
        }
    }
}

struct NormalizedApplicant {
    profession: Option<String>,
    city: Option<String>,
    state: Option<String>,
    experience: Option<String>,
    education: Option<String>,
    certifications: Option<String>,
}

impl From<&ApplicantProfile> for NormalizedApplicant {
    fn from(p: &ApplicantProfile) -> Self {
        Self {
            profession: normalized(p.profession.as_deref()),
            city: normalized(p.city.as_deref()),
            state: normalized(p.state.as_deref()),
            experience: normalized(p.experience_level.as_deref()),
            education: normalized(p.education_level.as_deref()),
            certifications: normalized(p.certifications.as_deref()),
        }
    }
}

struct NormalizedPosting {
    title: Option<String>,
    description: Option<String>,
    department: Option<String>,
    requirements: Option<String>,
    city: Option<String>,
    state: Option<String>,
}

impl From<&JobPosting> for NormalizedPosting {
    fn from(j: &JobPosting) -> Self {
        Self {
            title: normalized(j.title.as_deref()),
            description: normalized(j.description.as_deref()),
            department: normalized(j.department.as_deref()),
            requirements: normalized(j.requirements.as_deref()),
            city: normalized(j.city.as_deref()),
            state: normalized(j.state.as_deref()),
        }
    }
}

/// Rule 1: profession in title/description, then role-variant bonus
fn score_profession(applicant: &NormalizedApplicant, job: &NormalizedPosting, tally: &mut Tally) {
    let Some(profession) = applicant.profession.as_deref() else {
        return;
    };
    let title = job.title.as_deref();

    if contains(title, profession) {
        tally.add(35, "Matches your profession");
    } else if contains(job.description.as_deref(), profession) {
        tally.add(20, "Related to your profession");
    }

    // The bonus checks the running total, so it can stack on a description match.
    for group in ROLE_VARIANTS.iter().filter(|g| profession.contains(g.key)) {
        if first_hit(group.variants, &[title]).is_some() && tally.score < 35 {
            tally.add(30, "Matches your healthcare role");
        }
    }
}

/// Rule 2: exact city, same state, or overlapping city names
fn score_location(applicant: &NormalizedApplicant, job: &NormalizedPosting, tally: &mut Tally) {
    let (Some(city), Some(state)) = (applicant.city.as_deref(), applicant.state.as_deref()) else {
        return;
    };
    let job_city = job.city.as_deref();
    let same_state = job.state.as_deref() == Some(state);

    if same_state && job_city == Some(city) {
        tally.add(25, "Same city as you");
    } else if same_state {
        tally.add(15, "Same state");
    } else if job_city.is_some_and(|jc| jc.contains(city) || city.contains(jc)) {
        tally.add(10, "Nearby location");
    }
}

/// Rule 3: senior, junior or entry tier, first tier that applies wins
fn score_experience(applicant: &NormalizedApplicant, job: &NormalizedPosting, tally: &mut Tally) {
    let Some(experience) = applicant.experience.as_deref() else {
        return;
    };
    let years = extract_years(experience);
    let title = job.title.as_deref();
    let requirements = job.requirements.as_deref();

    if experience.contains("senior") || years >= 5 {
        if first_hit(&["senior", "lead", "manager"], &[title]).is_some() {
            tally.add(20, "Senior level position");
        } else if first_hit(&["5+ years", "experienced"], &[requirements]).is_some() {
            tally.add(15, "Matches experience level");
        }
    } else if experience.contains("junior") || years >= 1 {
        if contains(title, "junior") || contains(requirements, "1-3 years") {
            tally.add(20, "Junior level position");
        }
    } else if experience.contains("entry") || years == 0 {
        if first_hit(&["entry", "new grad"], &[title]).is_some()
            || contains(requirements, "no experience")
        {
            tally.add(20, "Entry level position");
        }
    }
}

/// Rule 4: degree level against requirements
fn score_education(applicant: &NormalizedApplicant, job: &NormalizedPosting, tally: &mut Tally) {
    let Some(education) = applicant.education.as_deref() else {
        return;
    };
    let requirements = job.requirements.as_deref();

    if education.contains("bachelor") && contains(requirements, "bsn") {
        tally.add(15, "Education requirement met");
    } else if education.contains("master")
        && first_hit(&["msn", "master"], &[requirements]).is_some()
    {
        tally.add(15, "Advanced degree match");
    } else if education.contains("associate") && contains(requirements, "associate") {
        tally.add(15, "Education requirement met");
    }
}

/// Rule 5: each held certification the posting asks for
fn score_certifications(
    applicant: &NormalizedApplicant,
    job: &NormalizedPosting,
    tally: &mut Tally,
) {
    let Some(held) = applicant.certifications.as_deref() else {
        return;
    };
    let fields = [job.requirements.as_deref(), job.title.as_deref()];

    for cert in CERTIFICATIONS.iter().filter(|c| held.contains(c.token)) {
        if first_hit(cert.keywords, &fields).is_some() {
            tally.add(cert.points, cert.label);
        }
    }
}

/// Rule 6: specialties named in the profession
fn score_specialties(applicant: &NormalizedApplicant, job: &NormalizedPosting, tally: &mut Tally) {
    let Some(profession) = applicant.profession.as_deref() else {
        return;
    };
    let fields = [
        job.title.as_deref(),
        job.department.as_deref(),
        job.description.as_deref(),
    ];

    for specialty in SPECIALTIES.iter().filter(|s| profession.contains(s.name)) {
        if first_hit(specialty.keywords, &fields).is_some() {
            tally.add(SPECIALTY_POINTS, specialty.label);
        }
    }
}

/// Whole days between posting and `now`, rounded toward negative infinity
#[inline]
pub fn days_since_posted(posted: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - posted).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Rule 7: fresh postings
fn score_recency(posted: Option<DateTime<Utc>>, now: DateTime<Utc>, tally: &mut Tally) {
    let Some(posted) = posted else {
        return;
    };
    let days = days_since_posted(posted, now);

    if days <= 7 {
        tally.add(5, "Recently posted");
    } else if days <= 14 {
        tally.add(3, "Posted recently");
    }
}

/// Rule 8: applications already received
fn score_competition(applications: u32, tally: &mut Tally) {
    if applications == 0 {
        return;
    }
    if applications < 5 {
        tally.add(5, "Low competition");
    } else if applications > 20 {
        tally.add(3, "Popular position");
    }
}
