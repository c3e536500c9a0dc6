use thiserror::Error;

/// Failures talking to the REST API.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Request encoding error: {0}")]
    RequestEncoding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Form values that cannot be turned into a submission payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
}

/// Unknown wire value for a closed enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid enum value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Errors surfaced by page controllers.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("No form is open")]
    DrawerClosed,
}
