use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::users::error::UserRecordError;

/// Account role, persisted as its uppercase literal.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum UserRole {
  #[serde(rename = "INACTIVE")]
  Inactive,
  #[serde(rename = "RESTRICTED")]
  Restricted,
  #[serde(rename = "REGULAR")]
  Regular,
  #[serde(rename = "ADMIN")]
  Admin,
}

impl UserRole {
  pub const ALL: [UserRole; 4] = [
    UserRole::Inactive,
    UserRole::Restricted,
    UserRole::Regular,
    UserRole::Admin,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      UserRole::Inactive => "INACTIVE",
      UserRole::Restricted => "RESTRICTED",
      UserRole::Regular => "REGULAR",
      UserRole::Admin => "ADMIN",
    }
  }
}

impl fmt::Display for UserRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for UserRole {
  type Err = UserRecordError;

  fn from_str(literal: &str) -> Result<Self, Self::Err> {
    UserRole::ALL
      .into_iter()
      .find(|role| role.as_str() == literal)
      .ok_or_else(|| {
        tracing::debug!(literal, "rejected unknown role literal");
        UserRecordError::UnknownRole(literal.to_string())
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_role_literal_round_trip() {
    for role in UserRole::ALL {
      let parsed: UserRole = role.to_string().parse().unwrap();
      assert_eq!(parsed, role);
    }
  }

  #[test]
  fn test_role_parse_is_case_sensitive() {
    let error = "admin".parse::<UserRole>().unwrap_err();
    assert_eq!(error, UserRecordError::UnknownRole(String::from("admin")));
  }

  #[test]
  fn test_role_parse_rejects_unknown() {
    assert!("SUPERUSER".parse::<UserRole>().is_err());
    assert!("".parse::<UserRole>().is_err());
  }

  #[test]
  fn test_role_serializes_as_storage_literal() {
    let json = serde_json::to_string(&UserRole::Restricted).unwrap();
    assert_eq!(json, r#""RESTRICTED""#);

    let role: UserRole = serde_json::from_str(r#""REGULAR""#).unwrap();
    assert_eq!(role, UserRole::Regular);
  }
}
