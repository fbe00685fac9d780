use crate::errors::DozeError;
use crate::register_sync_op;
use crate::run::errors::try_value_to_text;
use crate::run::ops::macros::collect_args;

pub fn register_console_ops(
    scope: &mut v8::ContextScope<v8::HandleScope>,
    console: &v8::Object,
) -> Result<(), DozeError> {
    register_sync_op!(scope, console, "log", sync_op_log);
    register_sync_op!(scope, console, "error", sync_op_error);

    Ok(())
}

/// `None` when converting an argument threw.
fn join_args<'s>(
    scope: &mut v8::HandleScope<'s>,
    args: &v8::FunctionCallbackArguments<'s>,
) -> Option<String> {
    let parts = collect_args(args)
        .into_iter()
        .map(|value| try_value_to_text(scope, value))
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join(" "))
}

fn sync_op_log<'s>(
    scope: &mut v8::HandleScope<'s>,
    args: v8::FunctionCallbackArguments<'s>,
    _rv: v8::ReturnValue,
) {
    if let Some(line) = join_args(scope, &args) {
        println!("{}", line);
    }
}

fn sync_op_error<'s>(
    scope: &mut v8::HandleScope<'s>,
    args: v8::FunctionCallbackArguments<'s>,
    _rv: v8::ReturnValue,
) {
    if let Some(line) = join_args(scope, &args) {
        eprintln!("{}", line);
    }
}
