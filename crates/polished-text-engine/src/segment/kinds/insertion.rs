/// Inserted span `**text**`: content added by the reviser.
pub struct Insertion;

impl Insertion {
    /// Opening and closing delimiter.
    pub const MARK: &'static [u8; 2] = b"**";
    /// [`Self::MARK`] as text, for writers.
    pub const TEXT: &'static str = "**";
}
