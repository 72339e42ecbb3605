/// One of the four binary operators a countdown expression may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Mul, Operator::Sub, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Precedence class: 0 for the additive operators, 1 for the multiplicative ones.
    /// Leaves sit above both at [`LEAF_PRECEDENCE`].
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 0,
            Operator::Mul | Operator::Div => 1,
        }
    }

    /// Whether the right operand may drop its parentheses at equal precedence
    pub fn is_associative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    pub fn is_additive(self) -> bool {
        self.precedence() == 0
    }

    pub fn is_multiplicative(self) -> bool {
        self.precedence() == 1
    }
}

pub const LEAF_PRECEDENCE: u8 = 2;

/// A single entry of a postfix derivation trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Number(u64),
    Op(Operator),
}

impl Token {
    pub fn precedence(&self) -> u8 {
        match self {
            Token::Op(op) => op.precedence(),
            Token::Number(_) => LEAF_PRECEDENCE,
        }
    }
}
