use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  shared::role::UserRole,
  users::{error::UserRecordError, fields::UserFields},
};

/// One row of the user table.
///
/// Every column is nullable: `uid` is assigned by storage, and `password`
/// is empty for accounts that sign in through Google.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
  pub name: Option<String>,
  pub uid: Option<u32>,
  pub password: Option<String>,
  pub google_id: Option<String>,
  pub role: Option<UserRole>,
}

impl UserRecord {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_fields(
    name: Option<String>,
    uid: Option<u32>,
    password: Option<String>,
    google_id: Option<String>,
    role: Option<UserRole>,
  ) -> Self {
    Self {
      name,
      uid,
      password,
      google_id,
      role,
    }
  }

  pub fn from_source<S: UserFields + ?Sized>(
    source: Option<&S>,
  ) -> Result<Self, UserRecordError> {
    let mut record = Self::new();
    record.try_copy_from(source)?;
    Ok(record)
  }
}

impl UserFields for UserRecord {
  fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  fn set_name(&mut self, name: Option<String>) {
    self.name = name;
  }

  fn uid(&self) -> Option<u32> {
    self.uid
  }

  fn set_uid(&mut self, uid: Option<u32>) {
    self.uid = uid;
  }

  fn password(&self) -> Option<&str> {
    self.password.as_deref()
  }

  fn set_password(&mut self, password: Option<String>) {
    self.password = password;
  }

  fn google_id(&self) -> Option<&str> {
    self.google_id.as_deref()
  }

  fn set_google_id(&mut self, google_id: Option<String>) {
    self.google_id = google_id;
  }

  fn role(&self) -> Option<UserRole> {
    self.role
  }

  fn set_role(&mut self, role: Option<UserRole>) {
    self.role = role;
  }
}

struct OrNull<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(value) => value.fmt(f),
      None => f.write_str("null"),
    }
  }
}

// Debug rendering only, includes the password column as stored.
impl fmt::Display for UserRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "User ({}, {}, {}, {}, {})",
      OrNull(&self.name),
      OrNull(&self.uid),
      OrNull(&self.password),
      OrNull(&self.google_id),
      OrNull(&self.role),
    )
  }
}
