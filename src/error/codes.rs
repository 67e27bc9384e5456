#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    DirectoryNotFound = 3,
    AmbiguousSequence = 4,
    NameCollision = 5,
    StagingFolder = 6,
    /// Isolation failed but everything was rolled back; no net effect.
    Isolation = 7,
    /// Files remain in the staging folder; operator attention required.
    RollbackFailed = 8,
    /// Some files renamed, some still staged; operator attention required.
    PartialCommit = 9,
    PermissionError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}
