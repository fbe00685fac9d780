use delay::DelayError;

/// Positional arguments of a native call, in order.
pub fn collect_args<'s>(args: &v8::FunctionCallbackArguments<'s>) -> Vec<v8::Local<'s, v8::Value>> {
    (0..args.length()).map(|i| args.get(i)).collect()
}

pub fn throw_error(scope: &mut v8::HandleScope, message: &str) {
    if let Some(message) = v8::String::new(scope, message) {
        let exception = v8::Exception::error(scope, message);
        scope.throw_exception(exception);
    }
}

pub fn throw_type_error(scope: &mut v8::HandleScope, message: &str) {
    if let Some(message) = v8::String::new(scope, message) {
        let exception = v8::Exception::type_error(scope, message);
        scope.throw_exception(exception);
    }
}

/// Argument-type failures surface as `TypeError`, everything else as `Error`.
/// A failure raised by the script itself keeps its pending exception.
pub fn throw_delay_error(scope: &mut v8::HandleScope, error: &DelayError) {
    if error.is_host_raised() {
        return;
    }
    if error.is_type_error() {
        throw_type_error(scope, &error.to_string());
    } else {
        throw_error(scope, &error.to_string());
    }
}

#[macro_export]
macro_rules! register_sync_op {
    ($scope:expr, $target:expr, $name:expr, $op:expr) => {{
        let function = v8::Function::new($scope, $op).ok_or_else(|| {
            $crate::errors::DozeError::V8FunctionCreation {
                name: $name.to_string(),
            }
        })?;
        let key = v8::String::new($scope, $name).ok_or($crate::errors::DozeError::V8StringCreation)?;
        $target.set($scope, key.into(), function.into());
    }};
}
