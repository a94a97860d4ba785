mod scanner;
mod char_scanner;
mod expr_tokenizer;

pub use scanner::Scanner;
pub use expr_tokenizer::ExprTokenizer;
