#[derive(Debug)]
pub enum ExtractError {
    Io(std::io::Error),
    Archive(zip::result::ZipError),
    MissingEntry(String),
    TruncatedPayload { expected: usize, actual: usize },
    Parse(serde_json::Error),
    Schema(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {}", e),
            Self::Archive(e) => write!(f, "unable to read archive: {}", e),
            Self::MissingEntry(name) => write!(f, "archive has no entry named {}", name),
            Self::TruncatedPayload { expected, actual } => write!(
                f,
                "payload is {} bytes, shorter than the {} byte prefix",
                actual, expected
            ),
            Self::Parse(e) => write!(f, "unable to parse tweets: {}", e),
            Self::Schema(s) => write!(f, "unexpected tweet data: {}", s),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Archive(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(e) => Self::Io(e),
            e => Self::Archive(e),
        }
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
