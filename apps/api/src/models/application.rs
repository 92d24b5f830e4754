use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Job roles offered by the logging form. Free text is accepted as well.
pub const JOB_ROLE_OPTIONS: &[&str] = &[
    "AI Engineer",
    "Data Scientist",
    "Data Analyst",
    "Business Analyst",
    "ML Engineer",
    "Research Scientist",
    "Deep Learning Engineer",
    "Computer Vision Engineer",
    "NLP Engineer",
    "Other",
];

/// Where the application was submitted. Free text is accepted as well.
pub const WEBSITE_OPTIONS: &[&str] = &[
    "LinkedIn",
    "Indeed",
    "Naukri",
    "Glassdoor",
    "Internshala",
    "Hirect",
    "Company Website",
    "AngelList",
    "Other",
];

/// One row of `job_applications`.
///
/// `status` is kept as plain text on read: the enumeration is enforced when
/// writing, not by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: i32,
    pub company_name: String,
    pub job_role: String,
    pub applied_date: NaiveDate,
    pub website: String,
    pub status: String,
    pub notes: Option<String>,
}

/// A validated application ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub company_name: String,
    pub job_role: String,
    pub applied_date: NaiveDate,
    pub website: String,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
    #[serde(rename = "Followed-Up")]
    FollowedUp,
    Other,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::FollowedUp,
        ApplicationStatus::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::FollowedUp => "Followed-Up",
            ApplicationStatus::Other => "Other",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status '{s}'"))
    }
}
