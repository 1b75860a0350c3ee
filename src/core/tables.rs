//! Fixed keyword tables used by the scoring rules.
//!
//! Order matters: every table is scanned in declaration order and the first
//! matching keyword wins within an entry.

/// Coarse profession keyword and the title variants that count as the same role
pub struct RoleVariants {
    pub key: &'static str,
    pub variants: &'static [&'static str],
}

pub const ROLE_VARIANTS: &[RoleVariants] = &[
    RoleVariants { key: "nurse", variants: &["rn", "lpn", "nursing", "registered nurse"] },
    RoleVariants { key: "doctor", variants: &["physician", "md", "medical doctor"] },
    RoleVariants { key: "therapist", variants: &["therapy", "pt", "ot", "speech"] },
    RoleVariants { key: "aide", variants: &["cna", "assistant", "caregiver"] },
    RoleVariants { key: "technician", variants: &["tech", "technologist", "lab"] },
];

/// A certification the applicant may hold and how postings ask for it
pub struct Certification {
    /// Token searched for in the applicant's certifications text
    pub token: &'static str,
    /// Searched in the posting's requirements and title
    pub keywords: &'static [&'static str],
    pub points: u32,
    pub label: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        token: "rn",
        keywords: &["rn", "registered nurse"],
        points: 8,
        label: "RN license required",
    },
    Certification {
        token: "lpn",
        keywords: &["lpn", "licensed practical"],
        points: 8,
        label: "LPN license required",
    },
    Certification {
        token: "cna",
        keywords: &["cna", "certified nursing assistant", "nursing assistant"],
        points: 8,
        label: "CNA certification required",
    },
    Certification {
        token: "bls",
        keywords: &["bls", "basic life support"],
        points: 6,
        label: "BLS certified",
    },
    Certification {
        token: "cpr",
        keywords: &["cpr", "cardiopulmonary"],
        points: 6,
        label: "CPR certified",
    },
    Certification {
        token: "acls",
        keywords: &["acls", "advanced cardiac"],
        points: 8,
        label: "ACLS certified",
    },
    Certification {
        token: "pals",
        keywords: &["pals", "pediatric advanced"],
        points: 8,
        label: "PALS certified",
    },
];

/// Clinical specialty named in the applicant's profession
pub struct Specialty {
    pub name: &'static str,
    /// Searched in the posting's title, department and description
    pub keywords: &'static [&'static str],
    pub label: &'static str,
}

pub const SPECIALTY_POINTS: u32 = 15;

pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        name: "icu",
        keywords: &["icu", "intensive care", "critical care"],
        label: "ICU specialty match",
    },
    Specialty {
        name: "er",
        keywords: &["emergency", "trauma", "urgent care"],
        label: "Emergency care match",
    },
    Specialty {
        name: "pediatric",
        keywords: &["pediatric", "children", "nicu", "picu"],
        label: "Pediatric specialty match",
    },
    Specialty {
        name: "surgical",
        keywords: &["surgical", "surgery", "operating room", "perioperative"],
        label: "Surgical specialty match",
    },
    Specialty {
        name: "oncology",
        keywords: &["oncology", "cancer", "chemotherapy"],
        label: "Oncology specialty match",
    },
    Specialty {
        name: "cardiology",
        keywords: &["cardiology", "cardiac", "heart"],
        label: "Cardiology specialty match",
    },
    Specialty {
        name: "home health",
        keywords: &["home health", "home care", "hospice"],
        label: "Home health match",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_points() {
        let points: Vec<(&str, u32)> = CERTIFICATIONS.iter().map(|c| (c.token, c.points)).collect();
        assert_eq!(
            points,
            vec![
                ("rn", 8),
                ("lpn", 8),
                ("cna", 8),
                ("bls", 6),
                ("cpr", 6),
                ("acls", 8),
                ("pals", 8),
            ]
        );
    }

    #[test]
    fn test_tables_are_lowercase() {
        let all_keywords = ROLE_VARIANTS
            .iter()
            .flat_map(|r| std::iter::once(r.key).chain(r.variants.iter().copied()))
            .chain(
                CERTIFICATIONS
                    .iter()
                    .flat_map(|c| std::iter::once(c.token).chain(c.keywords.iter().copied())),
            )
            .chain(
                SPECIALTIES
                    .iter()
                    .flat_map(|s| std::iter::once(s.name).chain(s.keywords.iter().copied())),
            );

        for kw in all_keywords {
            assert_eq!(kw, kw.to_lowercase(), "keyword {kw:?} must be lowercase");
        }
    }

    #[test]
    fn test_specialty_table_size() {
        assert_eq!(SPECIALTIES.len(), 7);
        assert_eq!(ROLE_VARIANTS.len(), 5);
    }
}
