use crate::shared::role::UserRole;

use super::{fields::UserFields, model::user::UserRecord};

#[derive(Debug, Clone, Default)]
pub struct UserRecordBuilder {
  record: UserRecord,
}

impl UserRecordBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.record.name = Some(name.into());
    self
  }

  pub fn uid(mut self, uid: u32) -> Self {
    self.record.uid = Some(uid);
    self
  }

  pub fn password(mut self, password: impl Into<String>) -> Self {
    self.record.password = Some(password.into());
    self
  }

  pub fn google_id(mut self, google_id: impl Into<String>) -> Self {
    self.record.google_id = Some(google_id.into());
    self
  }

  pub fn role(mut self, role: UserRole) -> Self {
    self.record.role = Some(role);
    self
  }

  pub fn build(self) -> UserRecord {
    self.record
  }
}

// Accessors go through the trait so the chained setters above keep their names.
impl UserFields for UserRecordBuilder {
  fn name(&self) -> Option<&str> {
    self.record.name.as_deref()
  }

  fn set_name(&mut self, name: Option<String>) {
    self.record.name = name;
  }

  fn uid(&self) -> Option<u32> {
    self.record.uid
  }

  fn set_uid(&mut self, uid: Option<u32>) {
    self.record.uid = uid;
  }

  fn password(&self) -> Option<&str> {
    self.record.password.as_deref()
  }

  fn set_password(&mut self, password: Option<String>) {
    self.record.password = password;
  }

  fn google_id(&self) -> Option<&str> {
    self.record.google_id.as_deref()
  }

  fn set_google_id(&mut self, google_id: Option<String>) {
    self.record.google_id = google_id;
  }

  fn role(&self) -> Option<UserRole> {
    self.record.role
  }

  fn set_role(&mut self, role: Option<UserRole>) {
    self.record.role = role;
  }
}

#[cfg(test)]
mod tests {
  use fake::{
    faker::{internet::en::Password, name::raw::Name},
    locales::EN,
    Fake,
  };

  use super::*;

  #[test]
  fn test_build_federated_user() {
    let name: String = Name(EN).fake();

    let user = UserRecordBuilder::new()
      .name(name.clone())
      .uid(7)
      .google_id("g-123")
      .role(UserRole::Regular)
      .build();

    assert_eq!(
      user,
      UserRecord::with_fields(
        Some(name),
        Some(7),
        None,
        Some(String::from("g-123")),
        Some(UserRole::Regular),
      )
    );
  }

  #[test]
  fn test_record_round_trips_through_builder() {
    let password: String = Password(12..13).fake();
    let record = UserRecord::with_fields(
      Some(Name(EN).fake()),
      None,
      Some(password),
      None,
      Some(UserRole::Inactive),
    );

    let builder = record.copy_into(UserRecordBuilder::new());
    assert_eq!(UserFields::password(&builder), record.password.as_deref());

    let back = builder.copy_into(UserRecord::new());
    assert_eq!(back, record);
  }
}
