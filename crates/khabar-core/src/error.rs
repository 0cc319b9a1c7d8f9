/// Errors crossing the cleaning-engine boundary.
///
/// An item failing a filter is never an error; it is silently excluded and
/// only shows up in the batch counts. Zero survivors from a non-empty batch
/// is likewise a successful, empty result. The one distinguished failure is
/// a tokenization batch that produces no tokens at all.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no tokens generated from articles")]
    NoTokens,
}
