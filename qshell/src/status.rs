//! Process exit statuses and transfer block sizing.

/// Block size exponent: blocks are `1 << BLOCK_BITS` bytes.
pub const BLOCK_BITS: u32 = 22;

/// Transfer block size (4 MiB).
pub const BLOCK_SIZE: u64 = 1 << BLOCK_BITS;

/// Exit status reported by the command-line tool.
///
/// # Examples
///
/// ```
/// use qshell::ExitStatus;
///
/// assert_eq!(ExitStatus::Ok.code(), 0);
/// assert_eq!(ExitStatus::Halt.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Success.
    Ok,
    /// An operation failed while processing.
    Error,
    /// A local problem (bad arguments, unusable environment) stopped the run.
    Halt,
}

impl ExitStatus {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Error => 1,
            Self::Halt => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Ok.code(), 0);
        assert_eq!(ExitStatus::Error.code(), 1);
        assert_eq!(ExitStatus::Halt.code(), 2);
    }

    #[test]
    fn test_block_size_is_four_mebibytes() {
        assert_eq!(BLOCK_SIZE, 4 * 1024 * 1024);
    }
}
