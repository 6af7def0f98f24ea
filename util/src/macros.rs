#[cfg(debug_assertions)]
#[macro_export]
macro_rules! if_dbg_else {({$($tt_dbg: tt)*}{$($tt_else: tt)*}) => {
    $($tt_dbg)*
}}
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! if_dbg_else {({$($tt_dbg: tt)*}{$($tt_else: tt)*}) => {
    $($tt_else)*
}}

#[macro_export]
macro_rules! if_then_some {
    ($cond: expr, $val: expr) => {
        if $cond {
            Some($val)
        } else {
            None
        }
    };
}

/// Runs `$body` iff `$cond` holds and reports whether it ran.
#[macro_export]
macro_rules! if_then_true {
    ($cond: expr, $body: expr) => {
        if $cond {
            $body;
            true
        } else {
            false
        }
    };
}

pub trait TVerifiableByVerifyMacro {
    fn is_verify_true(&self) -> bool;
}

impl TVerifiableByVerifyMacro for bool {
    fn is_verify_true(&self) -> bool {
        *self
    }
}

impl<T> TVerifiableByVerifyMacro for Option<T> {
    fn is_verify_true(&self) -> bool {
        self.is_some()
    }
}

impl<TOk, TErr> TVerifiableByVerifyMacro for Result<TOk, TErr> {
    fn is_verify_true(&self) -> bool {
        self.is_ok()
    }
}

impl<T: TVerifiableByVerifyMacro> TVerifiableByVerifyMacro for &T {
    fn is_verify_true(&self) -> bool {
        T::is_verify_true(self)
    }
}

pub fn verify_internal<E: TVerifiableByVerifyMacro+std::fmt::Debug>(e: E, str_e: &str) -> E {
    assert!(e.is_verify_true(), "verify!({}): {:?}", str_e, e);
    e
}

/// Asserts that `$e` is `true`/`Some`/`Ok` and yields `$e`.
#[macro_export]
macro_rules! verify {($e: expr) => {{
    $crate::verify_internal($e, stringify!($e))
}}}

#[macro_export]
macro_rules! debug_verify{($e: expr) => {
    $crate::if_dbg_else!({$crate::verify!($e)}{$e})
}}

#[macro_export]
macro_rules! verify_eq {($e: expr, $e_chk: expr) => {{
    let e = $e;
    assert_eq!(e, $e_chk);
    e
}}}

/// Unwraps a value whose presence is an invariant of the caller.
/// Unlike `verify!`, the payload need not be `Debug`.
#[macro_export]
macro_rules! unwrap {($e: expr) => {{
    let e = $e;
    assert!($crate::TVerifiableByVerifyMacro::is_verify_true(&e), "unwrap!({})", stringify!($e));
    e.unwrap()
}}}

#[macro_export]
macro_rules! static_assert{($assert_name:ident($($args:tt)*)) => {
    $assert_name!($($args)*)
}}

#[test]
fn test_verify() {
    verify!(Some(4));
    verify!(true);
    assert_eq!(unwrap!(Some(3)), 3);
    assert_eq!(verify_eq!(1+1, 2), 2);
    assert!(debug_verify!(true));
    assert_eq!(debug_verify!(Some(2)), Some(2));
}

#[test]
fn test_unwrap_without_debug() {
    struct SNoDebug(usize);
    assert_eq!(unwrap!(Some(SNoDebug(3))).0, 3);
    let ont = Some(SNoDebug(4));
    assert_eq!(unwrap!(ont.as_ref()).0, 4);
}

#[test]
#[should_panic(expected = "unwrap!")]
fn test_unwrap_none() {
    unwrap!(None as Option<usize>);
}

#[test]
#[should_panic]
fn test_verify_none() {
    verify!(None as Option<usize>);
}

#[test]
fn test_if_then() {
    assert_eq!(if_then_some!(1<2, "lt"), Some("lt"));
    assert_eq!(if_then_some!(2<1, "lt"), None);
    let mut n = 0;
    assert!(if_then_true!(n==0, n+=1));
    assert!(!if_then_true!(n==0, n+=1));
    assert_eq!(n, 1);
}
