/// An arithmetic expression tree.
///
/// Each composite owns its children exclusively, so a tree is always finite and acyclic.
/// Nothing mutates a node once it is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Plus(Box<Expression>, Box<Expression>),
    Minus(Box<Expression>, Box<Expression>),
    Times(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn number(value: f64) -> Self {
        Expression::Number(value)
    }

    pub fn plus(left: Expression, right: Expression) -> Self {
        Expression::Plus(Box::new(left), Box::new(right))
    }

    pub fn minus(left: Expression, right: Expression) -> Self {
        Expression::Minus(Box::new(left), Box::new(right))
    }

    pub fn times(left: Expression, right: Expression) -> Self {
        Expression::Times(Box::new(left), Box::new(right))
    }

    pub fn divide(left: Expression, right: Expression) -> Self {
        Expression::Divide(Box::new(left), Box::new(right))
    }

    /// Left and right children of a composite, `None` for a leaf.
    pub fn children(&self) -> Option<(&Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Plus(l, r)
            | Expression::Minus(l, r)
            | Expression::Times(l, r)
            | Expression::Divide(l, r) => Some((&**l, &**r)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    /// Total number of nodes, leaves and composites alike.
    pub fn node_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((l, r)) => 1 + l.node_count() + r.node_count(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((l, r)) => l.leaf_count() + r.leaf_count(),
        }
    }

    /// Height of the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 1,
            Some((l, r)) => 1 + l.depth().max(r.depth()),
        }
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Number(value)
    }
}
