use core::fmt;

/// Status code of a completed operation.
pub const SUCCESS: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommonIoError {
    /// Operation failed
    Fail = 1,
    /// Checksum mismatch, reserved for device drivers
    ChecksumError = 2,
    /// Other error, reserved for device drivers
    OtherError = 3,
}

impl CommonIoError {
    /// Decode a numeric status. `None` for codes outside the declared set.
    pub fn from_status(code: i32) -> Option<Result<(), CommonIoError>> {
        match code {
            SUCCESS => Some(Ok(())),
            1 => Some(Err(CommonIoError::Fail)),
            2 => Some(Err(CommonIoError::ChecksumError)),
            3 => Some(Err(CommonIoError::OtherError)),
            _ => None,
        }
    }
}

impl From<CommonIoError> for i32 {
    fn from(e: CommonIoError) -> Self {
        e as i32
    }
}

impl fmt::Display for CommonIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommonIoError::Fail => write!(f, "operation failed"),
            CommonIoError::ChecksumError => write!(f, "checksum error"),
            CommonIoError::OtherError => write!(f, "other error"),
        }
    }
}

/// Collapse a result into the numeric status for C-style callers.
pub trait StatusCode {
    fn status_code(&self) -> i32;
}

impl<T> StatusCode for Result<T, CommonIoError> {
    fn status_code(&self) -> i32 {
        match self {
            Ok(_) => SUCCESS,
            Err(e) => (*e).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Ok::<(), CommonIoError>(()).status_code(), 0);
        assert_eq!(Err::<(), _>(CommonIoError::Fail).status_code(), 1);
        assert_eq!(i32::from(CommonIoError::ChecksumError), 2);
        assert_eq!(i32::from(CommonIoError::OtherError), 3);
    }

    #[test]
    fn test_from_status() {
        assert_eq!(CommonIoError::from_status(0), Some(Ok(())));
        assert_eq!(
            CommonIoError::from_status(1),
            Some(Err(CommonIoError::Fail))
        );
        assert_eq!(
            CommonIoError::from_status(3),
            Some(Err(CommonIoError::OtherError))
        );
        assert_eq!(CommonIoError::from_status(4), None);
        assert_eq!(CommonIoError::from_status(-1), None);
    }
}
