mod empty_container;
mod needless_group_expr;

use crate::rule::Rule;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(empty_container::EmptyContainer),
        Box::new(needless_group_expr::NeedlessGroupExpr),
    ]
}
