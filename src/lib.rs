pub mod shared;
pub mod users;

pub use shared::role::UserRole;
pub use users::builder::UserRecordBuilder;
pub use users::error::UserRecordError;
pub use users::fields::UserFields;
pub use users::model::user::UserRecord;
