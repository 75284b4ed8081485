//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (knowledge base is not a valid tree)
pub const DATAERR: i32 = 65;

/// Cannot open input (knowledge base unreadable)
pub const NOINPUT: i32 = 66;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Can't create output file
pub const CANTCREAT: i32 = 73;

/// Input/output error (player input closed or unreadable)
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
