/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": they are split out first, so bold, italic and
/// link markers inside backticks are never seen by the later passes.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
