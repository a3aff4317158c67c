use crate::shared::role::UserRole;

use super::error::UserRecordError;

/// Field-copy contract shared by every user-shaped value.
///
/// Implementors expose the five user columns. The provided methods copy all
/// of them at once, so any two implementors convert into each other.
pub trait UserFields {
  fn name(&self) -> Option<&str>;
  fn set_name(&mut self, name: Option<String>);

  fn uid(&self) -> Option<u32>;
  fn set_uid(&mut self, uid: Option<u32>);

  fn password(&self) -> Option<&str>;
  fn set_password(&mut self, password: Option<String>);

  fn google_id(&self) -> Option<&str>;
  fn set_google_id(&mut self, google_id: Option<String>);

  fn role(&self) -> Option<UserRole>;
  fn set_role(&mut self, role: Option<UserRole>);

  /// Overwrites every field of `self` with the field of `source`.
  fn copy_from<S: UserFields + ?Sized>(&mut self, source: &S) {
    self.set_name(source.name().map(str::to_owned));
    self.set_uid(source.uid());
    self.set_password(source.password().map(str::to_owned));
    self.set_google_id(source.google_id().map(str::to_owned));
    self.set_role(source.role());
  }

  /// Like [`UserFields::copy_from`], but for a source that may be absent.
  /// An absent source leaves `self` untouched.
  fn try_copy_from<S: UserFields + ?Sized>(
    &mut self,
    source: Option<&S>,
  ) -> Result<(), UserRecordError> {
    let Some(source) = source else {
      tracing::debug!("rejected user copy without a source");
      return Err(UserRecordError::MissingSource);
    };
    self.copy_from(source);
    Ok(())
  }

  fn copy_into<E: UserFields>(&self, mut target: E) -> E {
    target.copy_from(self);
    target
  }
}
