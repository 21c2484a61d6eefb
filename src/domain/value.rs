use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Aligo account id (`user_id`).
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    /// Form field name used by Aligo (`user_id`).
    pub const FIELD: &'static str = "user_id";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Aligo API key (`key`).
///
/// Invariant: non-empty after trimming. Treat as a secret.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Aligo (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "api key" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Aligo sender id (`sender`): a phone number or registered short code.
///
/// Invariant: non-empty after trimming. The value must be registered with
/// your Aligo account.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by Aligo (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "from" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Aligo message tier (`msg_type`): short (`SMS`) or long (`LMS`).
///
/// Aligo documents soft body limits of roughly 80 characters for SMS and
/// 2000 for LMS; this crate does not enforce them.
pub enum MessageType {
    #[default]
    Sms,
    Lms,
}

impl MessageType {
    /// Form field name used by Aligo (`msg_type`).
    pub const FIELD: &'static str = "msg_type";

    /// Parse a message type case-insensitively (`"sms"`, `"LMS"`, ...).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_uppercase().as_str() {
            "SMS" => Ok(Self::Sms),
            "LMS" => Ok(Self::Lms),
            _ => Err(ValidationError::InvalidMessageType {
                input: input.to_owned(),
            }),
        }
    }

    /// Wire representation, always uppercase.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Lms => "LMS",
        }
    }
}

impl std::str::FromStr for MessageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[derive(Debug, Clone)]
/// Parsed recipient phone number with an E.164 representation.
///
/// Opt-in: the send request accepts any non-empty string as a recipient, so
/// use this only when you want normalization. Equality, ordering, and
/// hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Aligo (`receiver`).
    pub const FIELD: &'static str = "receiver";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "to" });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Parse a number with South Korea (`KR`) as the default region.
    pub fn kr(input: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(Some(country::Id::KR), input)
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl From<PhoneNumber> for String {
    /// Convert into the E.164 form for use as a recipient.
    fn from(value: PhoneNumber) -> Self {
        value.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Aligo result code embedded in the JSON response body.
///
/// Distinct from the HTTP status: per the vendor contract, any non-negative
/// code is success and any negative code is an error.
pub struct ResultCode(i32);

impl ResultCode {
    /// JSON field name used by Aligo (`result_code`).
    pub const FIELD: &'static str = "result_code";

    /// Construct a result code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Aligo.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Vendor contract: `result_code >= 0` is success.
    pub fn is_success(self) -> bool {
        self.0 >= 0
    }
}
