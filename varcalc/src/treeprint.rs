use crate::tree::Node;
use std::fmt;

// Every binary node gets its own parens so the shape the builder chose is
// visible: "x = 10 - 2 - 3" prints as "x = (10 - (2 - 3))"
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn operand(node: &Node) -> String {
            match node {
                Node::Assign(_, _) => format!("({})", node),
                _ => format!("{}", node),
            }
        }

        match self {
            Node::Literal(value) => write!(f, "{}", value),
            Node::Var(name) => write!(f, "{}", name),
            Node::PostIncrement(name) => write!(f, "{}++", name),
            Node::Binary(lhs, op, rhs) => {
                write!(f, "({} {} {})", operand(lhs), op, operand(rhs))
            }
            Node::Assign(target, value) => write!(f, "{} = {}", target, value),
        }
    }
}
