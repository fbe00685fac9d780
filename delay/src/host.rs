/// The runtime that marshals arguments into the operations.
///
/// Conversions take `&mut self` because a JavaScript host may run user code
/// (`valueOf`, `toString`) while coercing a value. They return `None` when
/// that code raised; the host keeps the exception pending for the caller.
pub trait Host {
    type Value;

    /// The value coerced with the host's number conversion.
    fn to_number(&mut self, value: &Self::Value) -> Option<f64>;

    /// The value coerced with the host's string conversion.
    fn to_text(&mut self, value: &Self::Value) -> Option<String>;

    fn is_callable(&mut self, value: &Self::Value) -> bool;

    /// Invokes `continuation` with no arguments and discards its result.
    /// Returns `false` when the continuation raised.
    fn invoke(&mut self, continuation: &Self::Value) -> bool;
}
