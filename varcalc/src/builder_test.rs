use crate::builder::TreeBuilder;
use crate::error::BuildError;
use crate::operator::ArithOp;
use crate::tree::Node;
use lexers::Scanner;

fn shape(expr: &str) -> Result<String, BuildError> {
    TreeBuilder::build_str(expr).map(|tree| tree.to_string())
}

#[test]
fn atoms() -> Result<(), BuildError> {
    assert_eq!(TreeBuilder::build_str("x = 1")?, Node::assign('x', Node::Literal(1)));
    assert_eq!(TreeBuilder::build_str("x++")?, Node::PostIncrement('x'));
    assert_eq!(TreeBuilder::build_str("++x")?, Node::pre_increment('x'));
    assert_eq!(TreeBuilder::build_str("y = x")?, Node::assign('y', Node::Var('x')));
    assert_eq!(TreeBuilder::build_str("y = 007")?, Node::assign('y', Node::Literal(7)));
    Ok(())
}

#[test]
fn sums_associate_right() -> Result<(), BuildError> {
    assert_eq!(shape("x = 10 - 2 - 3")?, "x = (10 - (2 - 3))");
    assert_eq!(shape("x = 1 - 2 + 3")?, "x = (1 - (2 + 3))");
    assert_eq!(shape("x = 2 + 3 * 4")?, "x = (2 + (3 * 4))");
    Ok(())
}

#[test]
fn products_take_one_atom() -> Result<(), BuildError> {
    assert_eq!(shape("x = 2 * 3 + 4")?, "x = ((2 * 3) + 4)");
    assert_eq!(shape("x = 2 * 3 * 4")?, "x = ((2 * 3) * 4)");
    assert_eq!(shape("x = 2 * 3 - 4 * 5")?, "x = ((2 * 3) - (4 * 5))");
    Ok(())
}

#[test]
fn parens() -> Result<(), BuildError> {
    assert_eq!(shape("z = (2 + 3) * 2")?, "z = ((2 + 3) * 2)");
    assert_eq!(shape("x = 2 * (3 + 4) + 1")?, "x = ((2 * (3 + 4)) + 1)");
    assert_eq!(shape("x = 5 - (1 + 1) - 1")?, "x = (5 - ((1 + 1) - 1))");
    assert_eq!(shape("z = ((1 + 2) * 3)")?, "z = ((1 + 2) * 3)");
    assert_eq!(shape("x = ((1 + 2) * (3 + 4))")?, "x = ((1 + 2) * (3 + 4))");
    assert_eq!(shape("x = (1)")?, "x = 1");
    Ok(())
}

#[test]
fn assignment_sugar() -> Result<(), BuildError> {
    assert_eq!(shape("w += ++x + 1")?, "w = (w + ((x = (1 + x)) + 1))");
    assert_eq!(shape("w = x++ + 1")?, "w = (x++ + 1)");
    assert_eq!(
        TreeBuilder::build_str("y += 2")?,
        Node::assign('y', Node::binary(Node::Var('y'), ArithOp::Add, Node::Literal(2))));
    Ok(())
}

#[test]
fn stray_close_paren_is_dropped() -> Result<(), BuildError> {
    assert_eq!(TreeBuilder::build_str("1 ) 2")?, Node::Literal(1));
    Ok(())
}

#[test]
fn any_string_iterator_works() -> Result<(), BuildError> {
    let tokens = vec!["a", "=", "(", "b", "+", "1", ")", "*", "2"];
    let mut scanner = Scanner::new(tokens.into_iter().map(String::from));
    let tree = TreeBuilder::build(&mut scanner)?;
    assert_eq!(tree.to_string(), "a = ((b + 1) * 2)");
    assert!(scanner.at_end());
    Ok(())
}

#[test]
fn errors() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(TreeBuilder::build_str(""), Err(BuildError::UnexpectedEnd));
    assert_eq!(TreeBuilder::build_str("x = 1 +"), Err(BuildError::UnexpectedEnd));
    assert_eq!(TreeBuilder::build_str(")"), Err(BuildError::NotAnAtom(")".into())));
    assert_eq!(TreeBuilder::build_str("3 = 4"), Err(BuildError::NotAssignable("3".into())));
    assert_eq!(TreeBuilder::build_str("x++ += 4"), Err(BuildError::NotAssignable("x++".into())));
    assert_eq!(
        TreeBuilder::build_str("x = 99999999999999999999"),
        Err(BuildError::LiteralOutOfRange("99999999999999999999".into())));
}

#[test]
fn second_assignment_needs_a_variable() {
    let _ = env_logger::builder().is_test(true).try_init();
    for expr in ["x = 1 + 2 = 3", "x = 2 * 3 = 4", "x = (1 + 2) = 3"] {
        assert!(
            matches!(TreeBuilder::build_str(expr), Err(BuildError::NotAssignable(_))),
            "expr {:?}", expr);
    }
}
