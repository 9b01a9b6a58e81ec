/// Hard ceiling on the operand count; the tree count grows super-exponentially
pub const MAX_OPERANDS: usize = 5;
/// Result limit used when the caller does not choose one
pub const DEFAULT_LIMIT: usize = 100;
