use crate::error::CalcError;
use crate::operator::ArithOp;
use crate::store::VarStore;

/// Evaluation tree for one input line.
///
/// Built once, evaluated once against a store, then dropped. Evaluation
/// mutates the store, never the tree. Pre-increment and `+=` have no
/// variant of their own, the builder expresses them with `Assign`.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Literal(i64),
    Var(char),
    Binary(Box<Node>, ArithOp, Box<Node>),
    Assign(char, Box<Node>),
    PostIncrement(char),
}

impl Node {
    pub fn binary(lhs: Node, op: ArithOp, rhs: Node) -> Node {
        Node::Binary(Box::new(lhs), op, Box::new(rhs))
    }

    pub fn assign(target: char, value: Node) -> Node {
        Node::Assign(target, Box::new(value))
    }

    // x += value  ->  x = x + value
    pub fn add_assign(target: char, value: Node) -> Node {
        Node::assign(target, Node::binary(Node::Var(target), ArithOp::Add, value))
    }

    // ++x  ->  x = 1 + x
    pub fn pre_increment(target: char) -> Node {
        Node::assign(target, Node::binary(Node::Literal(1), ArithOp::Add, Node::Var(target)))
    }

    pub fn eval(&self, store: &mut VarStore) -> Result<i64, CalcError> {
        match self {
            Node::Literal(value) => Ok(*value),
            Node::Var(name) => store.lookup(*name),
            Node::Binary(lhs, op, rhs) => {
                let lhs = lhs.eval(store)?;
                let rhs = rhs.eval(store)?;
                Ok(op.apply(lhs, rhs))
            }
            Node::Assign(target, value) => {
                let value = value.eval(store)?;
                store.set(*target, value);
                Ok(value)
            }
            Node::PostIncrement(name) => {
                let value = store.lookup(*name)?;
                store.set(*name, value.wrapping_add(1));
                Ok(value)
            }
        }
    }
}
