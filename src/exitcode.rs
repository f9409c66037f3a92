//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (validation failed, payer not a member)
pub const DATAERR: i32 = 65;

/// Cannot open input (group not found)
pub const NOINPUT: i32 = 66;

/// Input/output error (store failure)
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
