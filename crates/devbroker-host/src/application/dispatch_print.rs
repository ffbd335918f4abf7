//! The `print-file` handler.
//!
//! Print dispatch is a declared boundary, not a pipeline: the command must
//! be addressable, must accept its two arguments, and must complete without
//! error, while performing no observable action. Keep it that way; removing
//! the command would break the presentation-side contract.

use tracing::debug;

use devbroker_core::PrintArgs;

/// Accepts a print request and does nothing with it.
pub fn print_file(args: &PrintArgs) {
    debug!(
        file_path = %args.file_path,
        printer_name = %args.printer_name,
        "print-file accepted (dispatch not implemented)"
    );
}
