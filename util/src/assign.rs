/// Overwrites `dst` with `src` iff `fn_better(src, dst)`; reports whether `dst` changed.
pub fn assign_better<T>(dst: &mut T, src: T, fn_better: impl FnOnce(&T, &T) -> bool) -> bool {
    if_then_true!(fn_better(&src, dst), {
        *dst = src;
    })
}

pub fn assign_neq<T: Eq>(dst: &mut T, src: T) -> bool {
    assign_better(dst, src, |lhs, rhs| lhs!=rhs)
}

#[test]
fn test_assign() {
    let mut n = 1;
    assert!(assign_better(&mut n, 3, |n_lhs, n_rhs| n_lhs > n_rhs));
    assert!(!assign_better(&mut n, 2, |n_lhs, n_rhs| n_lhs > n_rhs));
    assert_eq!(n, 3);
    assert!(!assign_neq(&mut n, 3));
    assert!(assign_neq(&mut n, 5));
    assert_eq!(n, 5);
}
