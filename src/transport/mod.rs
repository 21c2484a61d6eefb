//! Transport layer: HTTP wire-format details (serialization/deserialization).

mod send;

pub use send::{SendForm, SendReply, TransportError, decode_send_json, encode_send_form};
