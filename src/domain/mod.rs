//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod schedule;
mod validation;
mod value;

pub use request::{SendOptions, SendSms};
pub use response::SendOutcome;
pub use schedule::ReserveTime;
pub use validation::ValidationError;
pub use value::{ApiKey, MessageType, PhoneNumber, ResultCode, SenderId, UserId};
