mod discarded_catch_payload;

use crate::rule::Rule;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(discarded_catch_payload::DiscardedCatchPayload)]
}
