mod audit;
mod member;

pub use audit::{AuditCommands, AuditListArgs, AuditRecordArgs, AuditSheetArgs};
pub use member::{MemberCommands, MemberEventArgs, MemberRemoveArgs, MemberSetArgs};
