use log::{debug, trace, warn};

use crate::errors::{expect_arity, DelayError};
use crate::host::Host;
use crate::sleeper::{millis_from_number, Sleeper};

pub const LENGTH_ARITY: usize = 1;
pub const DELAY_ARITY: usize = 2;

/// Sleeps for the argument read as milliseconds, then returns the UTF-8 byte
/// length of the same argument read as text.
///
/// Both coercions run before the wait so a raising argument ends the call
/// without sleeping.
pub fn length<H: Host, S: Sleeper>(
    host: &mut H,
    sleeper: &S,
    args: &[H::Value],
) -> Result<usize, DelayError> {
    expect_arity("length", LENGTH_ARITY, args.len())?;

    let value = &args[0];
    let raised = || DelayError::HostRaised { op: "length", position: 1 };
    let number = host.to_number(value).ok_or_else(raised)?;
    let text = host.to_text(value).ok_or_else(raised)?;

    let wait = millis_from_number(number);
    debug!("length: waiting {:?}", wait);
    sleeper.sleep(wait);

    trace!("length: measuring {:?}", text);
    Ok(text.len())
}

/// Sleeps for the first argument in milliseconds, then invokes the second.
pub fn delay<H: Host, S: Sleeper>(
    host: &mut H,
    sleeper: &S,
    args: &[H::Value],
) -> Result<(), DelayError> {
    expect_arity("delay", DELAY_ARITY, args.len())?;

    let continuation = &args[1];
    if !host.is_callable(continuation) {
        return Err(DelayError::ArgumentType {
            op: "delay",
            position: 2,
            expected: "a function",
        });
    }

    let number = host
        .to_number(&args[0])
        .ok_or(DelayError::HostRaised { op: "delay", position: 1 })?;
    let wait = millis_from_number(number);
    debug!("delay: waiting {:?}", wait);
    sleeper.sleep(wait);

    if !host.invoke(continuation) {
        warn!("delay: continuation raised an exception");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone)]
    pub enum TestValue {
        Number(f64),
        Text(String),
        Function(Rc<Cell<u32>>),
        /// Coercing this value raises, like a throwing `valueOf`.
        Raising,
    }

    pub struct TestHost;

    impl Host for TestHost {
        type Value = TestValue;

        fn to_number(&mut self, value: &TestValue) -> Option<f64> {
            match value {
                TestValue::Number(n) => Some(*n),
                TestValue::Text(s) => Some(s.trim().parse().unwrap_or(f64::NAN)),
                TestValue::Function(_) => Some(f64::NAN),
                TestValue::Raising => None,
            }
        }

        fn to_text(&mut self, value: &TestValue) -> Option<String> {
            match value {
                TestValue::Number(n) => Some(n.to_string()),
                TestValue::Text(s) => Some(s.clone()),
                TestValue::Function(_) => Some("function () {}".to_string()),
                TestValue::Raising => None,
            }
        }

        fn is_callable(&mut self, value: &TestValue) -> bool {
            matches!(value, TestValue::Function(_))
        }

        fn invoke(&mut self, continuation: &TestValue) -> bool {
            if let TestValue::Function(calls) = continuation {
                calls.set(calls.get() + 1);
            }
            true
        }
    }

    #[derive(Default)]
    pub struct RecordingSleeper {
        pub waits: RefCell<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    fn text(s: &str) -> TestValue {
        TestValue::Text(s.to_string())
    }

    #[test]
    fn test_length_uses_argument_as_wait_and_payload() {
        let sleeper = RecordingSleeper::default();
        let result = length(&mut TestHost, &sleeper, &[text("5000")]).unwrap();
        assert_eq!(result, 4);
        assert_eq!(*sleeper.waits.borrow(), vec![Duration::from_millis(5000)]);
    }

    #[test]
    fn test_length_counts_utf8_bytes() {
        let sleeper = RecordingSleeper::default();
        assert_eq!(length(&mut TestHost, &sleeper, &[text("héllo")]).unwrap(), 6);
        // Non-numeric text waits zero milliseconds.
        assert_eq!(*sleeper.waits.borrow(), vec![Duration::ZERO]);
    }

    #[test]
    fn test_length_wrong_arity_does_not_wait() {
        let sleeper = RecordingSleeper::default();
        let err = length(&mut TestHost, &sleeper, &[]).unwrap_err();
        assert!(matches!(err, DelayError::ArgumentCount { expected: 1, actual: 0, .. }));

        let err = length(&mut TestHost, &sleeper, &[text("1"), text("2")]).unwrap_err();
        assert!(matches!(err, DelayError::ArgumentCount { expected: 1, actual: 2, .. }));
        assert!(sleeper.waits.borrow().is_empty());
    }

    #[test]
    fn test_length_is_repeatable() {
        let sleeper = RecordingSleeper::default();
        let args = [TestValue::Number(250.0)];
        let first = length(&mut TestHost, &sleeper, &args).unwrap();
        let second = length(&mut TestHost, &sleeper, &args).unwrap();
        assert_eq!(first, 3);
        assert_eq!(first, second);
        assert_eq!(sleeper.waits.borrow().len(), 2);
    }

    #[test]
    fn test_delay_invokes_continuation_once() {
        let sleeper = RecordingSleeper::default();
        let calls = Rc::new(Cell::new(0));
        let args = [TestValue::Number(100.0), TestValue::Function(calls.clone())];

        delay(&mut TestHost, &sleeper, &args).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(*sleeper.waits.borrow(), vec![Duration::from_millis(100)]);

        delay(&mut TestHost, &sleeper, &args).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_delay_rejects_non_callable() {
        let sleeper = RecordingSleeper::default();
        let args = [TestValue::Number(100.0), text("not-a-function")];

        let err = delay(&mut TestHost, &sleeper, &args).unwrap_err();
        assert!(err.is_type_error());
        assert!(sleeper.waits.borrow().is_empty());
    }

    #[test]
    fn test_delay_wrong_arity() {
        let sleeper = RecordingSleeper::default();
        let calls = Rc::new(Cell::new(0));

        let err = delay(&mut TestHost, &sleeper, &[TestValue::Number(1.0)]).unwrap_err();
        assert!(matches!(err, DelayError::ArgumentCount { expected: 2, actual: 1, .. }));

        let args = [
            TestValue::Number(1.0),
            TestValue::Function(calls.clone()),
            TestValue::Number(2.0),
        ];
        let err = delay(&mut TestHost, &sleeper, &args).unwrap_err();
        assert!(matches!(err, DelayError::ArgumentCount { expected: 2, actual: 3, .. }));

        assert_eq!(calls.get(), 0);
        assert!(sleeper.waits.borrow().is_empty());
    }

    #[test]
    fn test_length_stops_when_coercion_raises() {
        let sleeper = RecordingSleeper::default();
        let err = length(&mut TestHost, &sleeper, &[TestValue::Raising]).unwrap_err();
        assert!(matches!(err, DelayError::HostRaised { op: "length", position: 1 }));
        assert!(sleeper.waits.borrow().is_empty());
    }

    #[test]
    fn test_delay_stops_when_duration_raises() {
        let sleeper = RecordingSleeper::default();
        let calls = Rc::new(Cell::new(0));
        let args = [TestValue::Raising, TestValue::Function(calls.clone())];

        let err = delay(&mut TestHost, &sleeper, &args).unwrap_err();
        assert!(err.is_host_raised());
        assert_eq!(calls.get(), 0);
        assert!(sleeper.waits.borrow().is_empty());
    }
}
