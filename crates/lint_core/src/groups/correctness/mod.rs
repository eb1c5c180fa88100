mod unresolved_reference;
mod unused_symbol;

use crate::rule::Rule;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(unused_symbol::UnusedSymbol),
        Box::new(unresolved_reference::UnresolvedReference),
    ]
}
