//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Domain     | Description                                      |
//! |------|------------|--------------------------------------------------|
//! | 0    | Universal  | Success                                          |
//! | 1    | Universal  | General error (unspecified)                      |
//! | 2    | Universal  | CLI usage error (bad args, unknown preference)   |
//! | 3    | Input      | Guest list could not be read or parsed           |
//! | 4    | Arrange    | Constraint violation (arrangement impossible)    |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant here
//! 2. Document what triggers it in the table above
//! 3. Wire it into the relevant command's error handling

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Input error - guest list file missing, unreadable, or malformed
/// (unknown extension, missing side titles, missing required columns).
pub const EXIT_INPUT: u8 = 3;

/// Constraint violation - a side could not be arranged under the
/// minimum-occupancy rules. The report still prints; the code tells
/// scripts the plan is incomplete.
pub const EXIT_CONSTRAINT: u8 = 4;
