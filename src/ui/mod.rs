use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Whether a prompt ended because the user pressed Esc or Ctrl+C.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, treating user cancellation as success.
///
/// A cancelled flow prints a newline to tidy the terminal and returns `Ok(())`.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        assert!(handle_prompt_cancellation(|| Ok(())).is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_swallows_cancel() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.is_ok());

        let result = handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("config is read-only")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("config is read-only"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        assert!(!is_prompt_cancelled(&InquireError::Custom("test".into())));
    }
}
