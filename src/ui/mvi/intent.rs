/// Marker trait for the inputs a screen reducer understands.
///
/// Intents are plain values: key presses already translated into
/// screen-level actions, or the outcome of an activation.
pub trait Intent: Send + 'static {}
