use serde::{Deserialize, Serialize};

// School shift
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl<'de> Deserialize<'de> for Shift {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Shift>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid shift: '{s}'. Supported shifts: morning, afternoon, evening"
            ))
        })
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Evening => "evening",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Shift::Morning),
            "afternoon" => Ok(Shift::Afternoon),
            "evening" => Ok(Shift::Evening),
            _ => Err(format!("Invalid shift: {s}")),
        }
    }
}

// Class group entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    pub shift: Shift,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
