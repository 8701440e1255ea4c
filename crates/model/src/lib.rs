//! `entikit-model` — concrete entities and sample data.

pub mod dto;
pub mod fixtures;
pub mod inherited;
pub mod user_record;

pub use dto::UserDto;
pub use inherited::Inherited;
pub use user_record::UserRecord;
