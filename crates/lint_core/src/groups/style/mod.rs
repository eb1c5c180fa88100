mod missing_doc_comment;

use crate::rule::Rule;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(missing_doc_comment::MissingDocComment)]
}
