use delay::{Host, ThreadSleeper};
use log::trace;

use crate::errors::DozeError;
use crate::register_sync_op;
use crate::run::errors::try_value_to_text;
use crate::run::ops::macros::{collect_args, throw_delay_error};

/// Exposes JavaScript values from one native call to the delay operations.
pub struct V8Host<'a, 's> {
    scope: &'a mut v8::HandleScope<'s>,
}

impl<'a, 's> V8Host<'a, 's> {
    pub fn new(scope: &'a mut v8::HandleScope<'s>) -> Self {
        Self { scope }
    }
}

impl<'a, 's> Host for V8Host<'a, 's> {
    type Value = v8::Local<'s, v8::Value>;

    fn to_number(&mut self, value: &Self::Value) -> Option<f64> {
        value.number_value(self.scope)
    }

    fn to_text(&mut self, value: &Self::Value) -> Option<String> {
        try_value_to_text(self.scope, *value)
    }

    fn is_callable(&mut self, value: &Self::Value) -> bool {
        value.is_function()
    }

    fn invoke(&mut self, continuation: &Self::Value) -> bool {
        let Ok(function) = v8::Local::<v8::Function>::try_from(*continuation) else {
            return false;
        };
        // Explicit undefined receiver, never the global object
        let receiver = v8::undefined(self.scope).into();
        function.call(self.scope, receiver, &[]).is_some()
    }
}

pub fn register_timing_ops(
    scope: &mut v8::ContextScope<v8::HandleScope>,
    target: &v8::Object,
) -> Result<(), DozeError> {
    register_sync_op!(scope, target, "length", sync_op_length);
    register_sync_op!(scope, target, "delay", sync_op_delay);

    Ok(())
}

fn sync_op_length<'s>(
    scope: &mut v8::HandleScope<'s>,
    args: v8::FunctionCallbackArguments<'s>,
    mut rv: v8::ReturnValue,
) {
    let values = collect_args(&args);
    trace!("length called with {} argument(s)", values.len());

    let result = delay::length(&mut V8Host::new(scope), &ThreadSleeper, &values);
    match result {
        Ok(length) => {
            let length = v8::Number::new(scope, length as f64);
            rv.set(length.into());
        }
        Err(e) => throw_delay_error(scope, &e),
    }
}

fn sync_op_delay<'s>(
    scope: &mut v8::HandleScope<'s>,
    args: v8::FunctionCallbackArguments<'s>,
    _rv: v8::ReturnValue,
) {
    let values = collect_args(&args);
    trace!("delay called with {} argument(s)", values.len());

    if let Err(e) = delay::delay(&mut V8Host::new(scope), &ThreadSleeper, &values) {
        throw_delay_error(scope, &e);
    }
}
