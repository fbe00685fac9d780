pub mod console;
pub mod listing;
pub mod macros;
pub mod timing;

use crate::errors::DozeError;
use crate::run::RunOptions;

/// Installs the native ops on `options.global_name` and a `console` object.
pub fn register_ops(
    scope: &mut v8::ContextScope<v8::HandleScope>,
    global: &v8::Object,
    options: &RunOptions,
) -> Result<(), DozeError> {
    let ops = v8::Object::new(scope);
    timing::register_timing_ops(scope, &ops)?;
    listing::register_listing_ops(scope, &ops)?;

    let argv = v8::Array::new(scope, options.argv.len() as i32);
    for (i, arg) in options.argv.iter().enumerate() {
        let arg = v8::String::new(scope, arg).ok_or(DozeError::V8StringCreation)?;
        argv.set_index(scope, i as u32, arg.into());
    }
    let argv_key = v8::String::new(scope, "argv").ok_or(DozeError::V8StringCreation)?;
    ops.set(scope, argv_key.into(), argv.into());

    let ops_key =
        v8::String::new(scope, &options.global_name).ok_or(DozeError::V8StringCreation)?;
    global.set(scope, ops_key.into(), ops.into());

    let console = v8::Object::new(scope);
    console::register_console_ops(scope, &console)?;
    let console_key = v8::String::new(scope, "console").ok_or(DozeError::V8StringCreation)?;
    global.set(scope, console_key.into(), console.into());

    Ok(())
}
