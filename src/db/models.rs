use serde::{Deserialize, Serialize};

/// A persisted row of the `Employees` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    #[serde(rename = "idEmployee")]
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub hashed_password: Option<String>,
}

/// Insert payload; any subset of fields may be supplied.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NewEmployee {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hashed_password: Option<String>,
}

impl NewEmployee {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}
