use serde::{Deserialize, Serialize};

// Enrollment status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Active,
    Inactive,
    DroppedOut,
    Transferred,
    Completed,
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<StudentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid student status: '{s}'. Supported statuses: active, inactive, dropped_out, transferred, completed"
            ))
        })
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StudentStatus::Active => "active",
            StudentStatus::Inactive => "inactive",
            StudentStatus::DroppedOut => "dropped_out",
            StudentStatus::Transferred => "transferred",
            StudentStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StudentStatus::Active),
            "inactive" => Ok(StudentStatus::Inactive),
            "dropped_out" => Ok(StudentStatus::DroppedOut),
            "transferred" => Ok(StudentStatus::Transferred),
            "completed" => Ok(StudentStatus::Completed),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// Student profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub class_group_id: Option<i64>,
    pub status: StudentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Profile joined with its account, the shape most endpoints return
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    pub profile: StudentProfile,
    pub user: crate::models::users::entities::User,
}
