/// Deleted span `~~text~~`: content removed by the reviser.
pub struct Deletion;

impl Deletion {
    /// Opening and closing delimiter.
    pub const MARK: &'static [u8; 2] = b"~~";
    /// [`Self::MARK`] as text, for writers.
    pub const TEXT: &'static str = "~~";
}
