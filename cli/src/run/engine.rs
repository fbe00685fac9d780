use log::{debug, info, trace};
use std::sync::Once;

use crate::errors::DozeError;
use crate::run::errors::{get_exception_message_with_stack, value_to_text};
use crate::run::ops;
use crate::run::RunOptions;

static V8_INIT: Once = Once::new();

fn init_v8() {
    V8_INIT.call_once(|| {
        info!("Initializing V8 engine");
        let platform = v8::new_default_platform(0, false).make_shared();
        v8::V8::initialize_platform(platform);
        v8::V8::initialize();
        debug!("V8 engine initialized");
    });
}

/// Runs `source` as a classic script in a fresh isolate with the native ops
/// installed. Returns the completion value unless it is `undefined`.
pub fn execute(source: &str, options: &RunOptions) -> Result<Option<String>, DozeError> {
    init_v8();

    debug!("Creating V8 isolate");
    let mut isolate = v8::Isolate::new(Default::default());
    let mut handle_scope = v8::HandleScope::new(&mut isolate);
    let context = v8::Context::new(&mut handle_scope, Default::default());
    let mut context_scope = v8::ContextScope::new(&mut handle_scope, context);
    let scope = &mut context_scope;

    let global = context.global(scope);
    ops::register_ops(scope, &global, options)?;
    debug!("Native ops registered on '{}'", options.global_name);

    let scope = &mut v8::TryCatch::new(scope);

    trace!("Compiling script ({} characters)", source.len());
    let code = v8::String::new(scope, source).ok_or(DozeError::V8StringCreation)?;
    let Some(script) = v8::Script::compile(scope, code, None) else {
        let message = match scope.exception() {
            Some(exception) => get_exception_message_with_stack(scope, exception),
            None => "unknown compile error".to_string(),
        };
        return Err(DozeError::ScriptCompilation { message });
    };

    trace!("Executing script");
    let Some(result) = script.run(scope) else {
        let message = match scope.exception() {
            Some(exception) => get_exception_message_with_stack(scope, exception),
            None => "execution terminated".to_string(),
        };
        return Err(DozeError::UncaughtException { message });
    };

    if result.is_undefined() {
        return Ok(None);
    }
    Ok(Some(value_to_text(scope, result)))
}
