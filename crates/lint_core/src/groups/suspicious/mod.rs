mod self_assignment;
mod shadowed_parameter;

use crate::rule::Rule;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(shadowed_parameter::ShadowedParameter),
        Box::new(self_assignment::SelfAssignment),
    ]
}
