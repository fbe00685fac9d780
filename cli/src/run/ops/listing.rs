use delay::{expect_arity, list_by_extension, DelayError, LIST_BY_EXTENSION_ARITY};
use log::{debug, warn};

use crate::errors::DozeError;
use crate::register_sync_op;
use crate::run::errors::try_value_to_text;
use crate::run::ops::macros::throw_delay_error;

pub fn register_listing_ops(
    scope: &mut v8::ContextScope<v8::HandleScope>,
    target: &v8::Object,
) -> Result<(), DozeError> {
    register_sync_op!(scope, target, "listByExtension", sync_op_list_by_extension);

    Ok(())
}

/// `listByExtension(dir, ext, callback)` reports through a node-style
/// `callback(err, names)` before returning.
fn sync_op_list_by_extension<'s>(
    scope: &mut v8::HandleScope<'s>,
    args: v8::FunctionCallbackArguments<'s>,
    _rv: v8::ReturnValue,
) {
    if let Err(e) = expect_arity(
        "listByExtension",
        LIST_BY_EXTENSION_ARITY,
        args.length() as usize,
    ) {
        throw_delay_error(scope, &e);
        return;
    }

    let Ok(callback) = v8::Local::<v8::Function>::try_from(args.get(2)) else {
        let e = DelayError::ArgumentType {
            op: "listByExtension",
            position: 3,
            expected: "a function",
        };
        throw_delay_error(scope, &e);
        return;
    };

    // A throwing toString leaves its exception pending for the caller
    let Some(dir) = try_value_to_text(scope, args.get(0)) else {
        return;
    };
    let Some(extension) = try_value_to_text(scope, args.get(1)) else {
        return;
    };
    debug!("Listing '{}' for extension '{}'", dir, extension);

    let callback_args: Vec<v8::Local<v8::Value>> = match list_by_extension(&dir, &extension) {
        Ok(names) => {
            let array = v8::Array::new(scope, names.len() as i32);
            for (i, name) in names.iter().enumerate() {
                if let Some(name) = v8::String::new(scope, name) {
                    array.set_index(scope, i as u32, name.into());
                }
            }
            vec![v8::null(scope).into(), array.into()]
        }
        Err(e) => {
            warn!("{}", e);
            let message = v8::String::new(scope, &e.to_string())
                .unwrap_or_else(|| v8::String::empty(scope));
            vec![v8::Exception::error(scope, message)]
        }
    };

    let receiver = v8::undefined(scope).into();
    callback.call(scope, receiver, &callback_args);
}
