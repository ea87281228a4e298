use serde::{Deserialize, Serialize};

// Account roles
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Teacher,     // leciona disciplinas
    Student,     // possui StudentProfile
    Admin,       // secretaria
    Coordinator, // coordenação pedagógica
    Director,    // direção
    ItStaff,     // suporte de TI
    Guardian,    // responsável por alunos
}

impl UserRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
    pub const ADMIN: &'static str = "admin";
    pub const COORDINATOR: &'static str = "coordinator";
    pub const DIRECTOR: &'static str = "director";
    pub const IT_STAFF: &'static str = "it_staff";
    pub const GUARDIAN: &'static str = "guardian";

    /// The coordination family: roles with school-wide administrative reach.
    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Admin,
            &Self::Coordinator,
            &Self::Director,
            &Self::ItStaff,
        ]
    }

    pub fn all_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Teacher,
            &Self::Student,
            &Self::Admin,
            &Self::Coordinator,
            &Self::Director,
            &Self::ItStaff,
            &Self::Guardian,
        ]
    }

    /// True for the coordination family regardless of superuser flag.
    pub fn is_admin_family(&self) -> bool {
        matches!(
            self,
            UserRole::Admin | UserRole::Coordinator | UserRole::Director | UserRole::ItStaff
        )
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid role: '{s}'. Supported roles: teacher, student, admin, coordinator, director, it_staff, guardian"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Teacher => UserRole::TEACHER,
            UserRole::Student => UserRole::STUDENT,
            UserRole::Admin => UserRole::ADMIN,
            UserRole::Coordinator => UserRole::COORDINATOR,
            UserRole::Director => UserRole::DIRECTOR,
            UserRole::ItStaff => UserRole::IT_STAFF,
            UserRole::Guardian => UserRole::GUARDIAN,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::TEACHER => Ok(UserRole::Teacher),
            Self::STUDENT => Ok(UserRole::Student),
            Self::ADMIN => Ok(UserRole::Admin),
            Self::COORDINATOR => Ok(UserRole::Coordinator),
            Self::DIRECTOR => Ok(UserRole::Director),
            Self::IT_STAFF => Ok(UserRole::ItStaff),
            Self::GUARDIAN => Ok(UserRole::Guardian),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// Account status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(serde::de::Error::custom(format!(
                "invalid status: '{s}'. Supported statuses: active, inactive"
            ))),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// Account entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // never leaves the server
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub is_superuser: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// Coordination family or superuser flag: unrestricted visibility.
    pub fn is_coordination(&self) -> bool {
        self.is_superuser || self.role.is_admin_family()
    }

    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }

    pub async fn generate_access_token(&self) -> String {
        match crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string()) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("JWT token generation failed: {}", e);
                format!(
                    "fallback_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    pub async fn generate_refresh_token(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> String {
        match crate::utils::jwt::JwtUtils::generate_refresh_token(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        ) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("JWT refresh token generation failed: {}", e);
                format!(
                    "fallback_refresh_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("token pair generation failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_display() {
        for role in UserRole::all_roles() {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, **role);
        }
    }

    #[test]
    fn admin_family_excludes_field_roles() {
        assert!(UserRole::Coordinator.is_admin_family());
        assert!(UserRole::ItStaff.is_admin_family());
        assert!(!UserRole::Teacher.is_admin_family());
        assert!(!UserRole::Student.is_admin_family());
        assert!(!UserRole::Guardian.is_admin_family());
    }
}
