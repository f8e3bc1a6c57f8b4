/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuceneErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "Phrase started here" (with span pointing to the `"`)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "Escape the character with `\` to search for it literally"
    Help,
}
