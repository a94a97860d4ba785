use crate::error::CalcError;
use crate::operator::ArithOp;
use crate::store::VarStore;
use crate::tree::Node;

fn store_with(bindings: &[(char, i64)]) -> VarStore {
    let mut st = VarStore::new();
    for &(name, value) in bindings {
        st.set(name, value);
    }
    st
}

#[test]
fn literal_and_var() {
    let mut st = store_with(&[('x', 7)]);
    assert_eq!(Node::Literal(3).eval(&mut st), Ok(3));
    assert_eq!(Node::Var('x').eval(&mut st), Ok(7));
    assert_eq!(Node::Var('y').eval(&mut st), Err(CalcError::UndefinedVariable('y')));
}

#[test]
fn binary_ops() {
    let mut st = VarStore::new();
    let sum = Node::binary(Node::Literal(2), ArithOp::Add, Node::Literal(3));
    let diff = Node::binary(Node::Literal(2), ArithOp::Sub, Node::Literal(3));
    let prod = Node::binary(Node::Literal(2), ArithOp::Mul, Node::Literal(3));
    assert_eq!(sum.eval(&mut st), Ok(5));
    assert_eq!(diff.eval(&mut st), Ok(-1));
    assert_eq!(prod.eval(&mut st), Ok(6));
    assert!(st.is_empty());
}

#[test]
fn assign_creates_and_overwrites() {
    let mut st = VarStore::new();
    assert_eq!(Node::assign('x', Node::Literal(1)).eval(&mut st), Ok(1));
    assert_eq!(Node::assign('x', Node::Literal(9)).eval(&mut st), Ok(9));
    assert_eq!(st.get('x'), Some(9));
}

#[test]
fn post_increment_yields_old_value() {
    let mut st = store_with(&[('x', 1)]);
    assert_eq!(Node::PostIncrement('x').eval(&mut st), Ok(1));
    assert_eq!(st.get('x'), Some(2));
    assert_eq!(Node::PostIncrement('q').eval(&mut st), Err(CalcError::UndefinedVariable('q')));
    assert_eq!(st.get('q'), None);
}

#[test]
fn pre_increment_yields_new_value() {
    let mut st = store_with(&[('x', 1)]);
    assert_eq!(Node::pre_increment('x').eval(&mut st), Ok(2));
    assert_eq!(st.get('x'), Some(2));
    assert_eq!(
        Node::pre_increment('x'),
        Node::assign('x', Node::binary(Node::Literal(1), ArithOp::Add, Node::Var('x'))));
}

#[test]
fn add_assign_reads_target_first() {
    let mut st = store_with(&[('w', 1)]);
    assert_eq!(Node::add_assign('w', Node::Literal(3)).eval(&mut st), Ok(4));
    assert_eq!(st.get('w'), Some(4));

    let mut empty = VarStore::new();
    assert_eq!(
        Node::add_assign('w', Node::Literal(3)).eval(&mut empty),
        Err(CalcError::UndefinedVariable('w')));
}

#[test]
fn left_is_evaluated_before_right() {
    // x++ * x  with x = 3  ->  3 * 4
    let mut st = store_with(&[('x', 3)]);
    let node = Node::binary(Node::PostIncrement('x'), ArithOp::Mul, Node::Var('x'));
    assert_eq!(node.eval(&mut st), Ok(12));
    assert_eq!(st.get('x'), Some(4));
}

#[test]
fn partial_effects_are_kept_on_failure() {
    // a = (b = 5) + c  with c undefined: b stays assigned, a does not
    let mut st = VarStore::new();
    let node = Node::assign('a', Node::binary(
        Node::assign('b', Node::Literal(5)), ArithOp::Add, Node::Var('c')));
    assert_eq!(node.eval(&mut st), Err(CalcError::UndefinedVariable('c')));
    assert_eq!(st.get('b'), Some(5));
    assert_eq!(st.get('a'), None);
}

#[test]
fn same_tree_against_different_stores() {
    let node = Node::binary(Node::Var('n'), ArithOp::Mul, Node::Literal(2));
    assert_eq!(node.eval(&mut store_with(&[('n', 4)])), Ok(8));
    assert_eq!(node.eval(&mut store_with(&[('n', -5)])), Ok(-10));
}

#[test]
fn post_increment_wraps() {
    let mut st = store_with(&[('m', i64::MAX)]);
    assert_eq!(Node::PostIncrement('m').eval(&mut st), Ok(i64::MAX));
    assert_eq!(st.get('m'), Some(i64::MIN));
}

#[test]
fn printing() {
    let node = Node::assign('x', Node::binary(
        Node::Literal(10), ArithOp::Sub,
        Node::binary(Node::Literal(2), ArithOp::Sub, Node::Literal(3))));
    assert_eq!(node.to_string(), "x = (10 - (2 - 3))");

    let node = Node::add_assign('w', Node::binary(
        Node::pre_increment('x'), ArithOp::Add, Node::Literal(1)));
    assert_eq!(node.to_string(), "w = (w + ((x = (1 + x)) + 1))");

    assert_eq!(Node::PostIncrement('y').to_string(), "y++");
}
