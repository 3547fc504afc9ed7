//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FILE_ACCESS: &str = "file.access";
pub const CHECK_FILE_SIZE: &str = "file.size";
pub const CHECK_FILE_AGE: &str = "file.age";
pub const CHECK_FILE_LINES: &str = "file.lines";
pub const CHECK_FILE_BLACKLIST: &str = "file.blacklist";

// Codes: file.access
pub const CODE_NOT_FOUND: &str = "not_found";
pub const CODE_STAT_FAILED: &str = "stat_failed";
pub const CODE_READ_FAILED: &str = "read_failed";

// Codes: file.size
pub const CODE_TOO_SMALL: &str = "too_small";
pub const CODE_TOO_BIG: &str = "too_big";
pub const CODE_PARENT_IS_SELF: &str = "parent_is_self";
pub const CODE_PARENT_MISSING: &str = "parent_missing";

// Codes: file.age
pub const CODE_OBSOLETE: &str = "obsolete";
pub const CODE_FUTURE_MTIME: &str = "future_mtime";
pub const CODE_MALFORMED_MAX_AGE: &str = "malformed_max_age";

// Codes: file.lines
pub const CODE_TOO_MANY_NEWLINES: &str = "too_many_newlines";

// Codes: file.blacklist
pub const CODE_BLACKLIST_MATCH: &str = "blacklist_match";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
