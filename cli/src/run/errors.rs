use log::{debug, trace};

/// Renders a thrown value for the terminal, preferring the error's stack.
pub fn get_exception_message_with_stack(
    scope: &mut v8::HandleScope,
    exception: v8::Local<v8::Value>,
) -> String {
    debug!("Processing JavaScript exception for error reporting");

    if let Ok(exception_obj) = v8::Local::<v8::Object>::try_from(exception) {
        for property in ["stack", "message"] {
            let Some(key) = v8::String::new(scope, property) else {
                continue;
            };
            if let Some(value) = exception_obj.get(scope, key.into()) {
                if value.is_string() {
                    trace!("Using exception '{}' property", property);
                    return value_to_text(scope, value);
                }
            }
        }
    }

    trace!("Exception has no stack or message, using its string form");
    value_to_text(scope, exception)
}

/// The value coerced with JavaScript's `String()`, or `None` when the
/// coercion threw and left an exception pending.
pub fn try_value_to_text(
    scope: &mut v8::HandleScope,
    value: v8::Local<v8::Value>,
) -> Option<String> {
    let text = value.to_string(scope)?;
    Some(text.to_rust_string_lossy(scope))
}

/// Like [`try_value_to_text`], for reporting paths where an empty string
/// is an acceptable fallback.
pub fn value_to_text(scope: &mut v8::HandleScope, value: v8::Local<v8::Value>) -> String {
    try_value_to_text(scope, value).unwrap_or_default()
}
