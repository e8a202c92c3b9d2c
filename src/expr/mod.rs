pub mod literal;
pub use literal::*;

pub mod operator;
pub use operator::*;

pub mod value_node;
pub use value_node::*;

pub mod comparison;
pub use comparison::*;

pub mod composite;
pub use composite::*;

pub mod expression;
pub use expression::*;

pub mod builder;
pub use builder::*;
