//! Profile view model assembly.

use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use unirecords_auth::Claims;
use unirecords_models::{
    ContactEntry, ProfileDataStatus, ProfileHeader, ProfileView, RoleProfile,
};

use super::presentation::PresentationCatalog;
use super::service::ProfileFetch;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";
const STUDENT_SUBTITLE: &str = "View your profile information and achievements.";
const STAFF_SUBTITLE: &str = "Manage your profile information and view your achievements.";
const DEFAULT_LOCATION: &str = "Department";
const MISSING_VALUE: &str = "—";

/// RFC 3986 unreserved characters stay as they are.
const SEED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// First letter of every word in `name`, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn avatar_url(name: &str) -> String {
    format!(
        "{}{}",
        AVATAR_BASE_URL,
        utf8_percent_encode(name, SEED_ENCODE_SET)
    )
}

pub fn subtitle(role: &str) -> &'static str {
    if role == "STUDENT" {
        STUDENT_SUBTITLE
    } else {
        STAFF_SUBTITLE
    }
}

pub fn location(profile: Option<&RoleProfile>) -> String {
    let unit = profile.and_then(|p| p.department.as_ref().or(p.school.as_ref()));

    match unit {
        Some(unit) => format!("{} ({})", unit.name, unit.code),
        None => DEFAULT_LOCATION.to_string(),
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

pub fn identifiers(role: &str, profile: Option<&RoleProfile>) -> Vec<String> {
    match role {
        "STUDENT" => vec![
            "Student".to_string(),
            format!(
                "Matric No: {}",
                or_missing(profile.and_then(|p| p.matric_number.as_deref()))
            ),
        ],
        "LECTURER" => vec![format!(
            "Staff ID: {}",
            or_missing(profile.and_then(|p| p.staff_id.as_deref()))
        )],
        "DEPARTMENT_ADMIN" | "SCHOOL_ADMIN" | "SENATE_ADMIN" => vec![format!(
            "Admin ID: {}",
            or_missing(profile.and_then(|p| p.admin_id.as_deref()))
        )],
        _ => Vec::new(),
    }
}

/// `officeHours` → `Office Hours`.
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
    }
    label
}

pub fn build_profile_view(
    claims: &Claims,
    fetch: &ProfileFetch,
    catalog: &PresentationCatalog,
    today: NaiveDate,
) -> ProfileView {
    let profile = fetch.profile();
    let presentation = catalog
        .for_role(&claims.role)
        .cloned()
        .unwrap_or_default();

    let header = ProfileHeader {
        name: claims.name.clone(),
        initials: initials(&claims.name),
        email: claims.email.clone(),
        role: claims.role.clone(),
        avatar_url: avatar_url(&claims.name),
        subtitle: subtitle(&claims.role).to_string(),
        location: location(profile),
        joined: profile
            .and_then(|p| p.joined_at)
            .map(|joined| joined.date_naive())
            .unwrap_or(today),
        identifiers: identifiers(&claims.role, profile),
    };

    let contact = presentation
        .contact
        .into_iter()
        .map(|field| ContactEntry {
            label: humanize_key(&field.key),
            key: field.key,
            value: field.value,
        })
        .collect();

    ProfileView {
        data_status: match fetch {
            ProfileFetch::Loaded(_) => ProfileDataStatus::Loaded,
            ProfileFetch::Unavailable => ProfileDataStatus::Unavailable,
        },
        header,
        achievements: presentation.achievements,
        statistics: presentation.stats,
        contact,
        profile: profile.cloned(),
    }
}
